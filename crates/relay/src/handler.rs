//! Check-in relay
//!
//! Validate an inbound check-in and forward it, unchanged, to the upstream
//! fleet-tracking API. One upstream call per request, no retries.

use anyhow::Context as _;
use bytes::Bytes;
use checkin_core::{CheckInPayload, HttpRequest, RelayReply, chain};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, Uri};
use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

use crate::{RelayConfig, RelayError, Result};

/// An inbound check-in as received from the client.
#[derive(Debug, Clone, Default)]
pub struct RelayRequest {
    /// Raw request body, expected to be a JSON check-in payload.
    pub body: Bytes,
    /// Caller's `Authorization` header, forwarded byte-for-byte.
    pub authorization: Option<HeaderValue>,
}

/// Relay a check-in to the upstream API.
///
/// # Errors
///
/// Returns [`RelayError::InvalidPayload`] when a payload field is missing,
/// [`RelayError::Misconfigured`] when no upstream endpoint is configured,
/// [`RelayError::Upstream`] when upstream answers with a non-success status
/// and [`RelayError::Internal`] for any other fault.
#[instrument(skip_all)]
pub async fn relay<P: HttpRequest>(
    config: &RelayConfig, request: RelayRequest, provider: &P,
) -> Result<RelayReply> {
    let result = forward(config, request, provider).await;
    if let Err(e) = &result {
        error!(monotonic_counter.relay_errors = 1, code = e.code(), error = %e);
    }
    result
}

async fn forward<P: HttpRequest>(
    config: &RelayConfig, request: RelayRequest, provider: &P,
) -> Result<RelayReply> {
    let document: Value =
        serde_json::from_slice(&request.body).context("parsing check-in request body")?;
    let payload = CheckInPayload::from_json(&document)
        .map_err(|missing| RelayError::InvalidPayload(missing.join(", ")))?;

    let Some(url) = config.upstream_url.as_deref() else {
        return Err(RelayError::Misconfigured);
    };

    let upstream = upstream_request(url, &payload, request.authorization)
        .map_err(|err| redacted(&err, url))?;
    let response = match tokio::time::timeout(config.timeout, provider.fetch(upstream)).await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => {
            let err = err.context("calling upstream");
            warn!(error = %chain(&err), "upstream call failed");
            return Err(redacted(&err, url));
        }
        Err(_elapsed) => {
            return Err(RelayError::Internal(format!(
                "upstream did not respond within {:?}",
                config.timeout
            )));
        }
    };

    // upstream does not always answer with JSON, so read text first
    let status = response.status();
    let text = String::from_utf8_lossy(response.body()).into_owned();
    if !status.is_success() {
        return Err(RelayError::Upstream { status: status.as_u16(), body: text });
    }

    let upstream_reply =
        serde_json::from_str::<Value>(&text).unwrap_or_else(|_| json!({ "raw": text }));

    info!(
        monotonic_counter.checkins_relayed = 1,
        plate = %payload.vehicle_plate,
        status = status.as_u16()
    );

    Ok(RelayReply::success(upstream_reply))
}

// The upstream URL may embed credentials and must never reach the caller.
fn redacted(err: &anyhow::Error, url: &str) -> RelayError {
    let mut reason = chain(err).replace(url, "<upstream>");
    if let Some(host) = url.parse::<Uri>().ok().as_ref().and_then(Uri::host) {
        reason = reason.replace(host, "<upstream>");
    }
    RelayError::Internal(reason)
}

fn upstream_request(
    url: &str, payload: &CheckInPayload, authorization: Option<HeaderValue>,
) -> anyhow::Result<Request<Bytes>> {
    let body = serde_json::to_vec(payload).context("serializing upstream payload")?;

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");
    if let Some(authorization) = authorization {
        builder = builder.header(AUTHORIZATION, authorization);
    }

    builder.body(Bytes::from(body)).context("building upstream request")
}
