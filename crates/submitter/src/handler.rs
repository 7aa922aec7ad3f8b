//! Check-in submission
//!
//! Resolve the device position, build the check-in payload and send it to the
//! relay. Exactly one network call is made per attempt.

use anyhow::Context as _;
use bytes::Bytes;
use checkin_core::{CheckInPayload, Clock, HttpRequest, chain};
use checkin_location::{Geolocation, acquire_location};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::Result;
use crate::config::SubmitterConfig;
use crate::error::SubmissionError;
use crate::plate::normalize_plate;
use crate::timestamp::format_timestamp;

/// Provider entry point implemented by the host application.
pub trait Provider: Geolocation + HttpRequest + Clock {}

impl<T> Provider for T where T: Geolocation + HttpRequest + Clock {}

/// A check-in the relay accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInReceipt {
    /// The payload as sent.
    pub payload: CheckInPayload,
    /// Parsed relay response body.
    pub response: Value,
}

/// Submit a check-in for `plate`.
///
/// `plate` is normalized first. An empty `credential` counts as absent; when
/// present it is sent as a bearer token.
///
/// # Errors
///
/// Returns a validation error before any I/O when the plate is empty or a
/// required credential is absent, [`SubmissionError::LocationFailed`] when no
/// fix could be obtained, and [`SubmissionError::UpstreamRejected`] when the
/// relay answers with a non-success status.
#[instrument(skip_all)]
pub async fn submit_check_in(
    config: &SubmitterConfig, plate: &str, credential: Option<&str>, provider: &impl Provider,
) -> Result<CheckInReceipt> {
    let vehicle_plate = normalize_plate(plate);
    if vehicle_plate.is_empty() {
        return Err(SubmissionError::MissingPlate);
    }
    let credential = credential.filter(|token| !token.is_empty());
    if config.require_credential && credential.is_none() {
        return Err(SubmissionError::MissingCredential);
    }

    let point = acquire_location(provider).await?;
    let payload = CheckInPayload {
        vehicle_plate,
        position_timestamp: format_timestamp(Clock::now(provider)),
        latitude: point.latitude.to_string(),
        longitude: point.longitude.to_string(),
    };

    let request = check_in_request(config, &payload, credential)
        .map_err(|err| SubmissionError::Transport(chain(&err)))?;

    let response = match tokio::time::timeout(config.timeout, provider.fetch(request)).await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => return Err(SubmissionError::Transport(chain(&err))),
        Err(_elapsed) => {
            return Err(SubmissionError::Transport(format!(
                "no response within {:?}",
                config.timeout
            )));
        }
    };

    let status = response.status();
    let body = response.into_body();
    if !status.is_success() {
        warn!(status = status.as_u16(), plate = %payload.vehicle_plate, "check-in rejected");
        return Err(SubmissionError::UpstreamRejected {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let response = serde_json::from_slice(&body)
        .map_err(|err| SubmissionError::MalformedResponse(err.to_string()))?;

    info!(monotonic_counter.checkins_submitted = 1, plate = %payload.vehicle_plate);
    Ok(CheckInReceipt { payload, response })
}

fn check_in_request(
    config: &SubmitterConfig, payload: &CheckInPayload, credential: Option<&str>,
) -> anyhow::Result<Request<Bytes>> {
    let body = serde_json::to_vec(payload).context("serializing check-in payload")?;

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(&config.endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");
    if let Some(token) = credential {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    builder.body(Bytes::from(body)).context("building check-in request")
}
