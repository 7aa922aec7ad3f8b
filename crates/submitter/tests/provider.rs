#![allow(missing_docs)]

use std::future;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use checkin_core::{Clock, HttpRequest};
use checkin_location::{GeoPoint, Geolocation, LocationError, PositionOptions};
use chrono::{DateTime, TimeZone, Utc};
use http::{HeaderMap, Request, Response, StatusCode};

/// How the mock relay answers.
#[derive(Clone)]
pub enum Relay {
    Respond(StatusCode, &'static str),
    Unreachable,
    Silent,
}

/// A request as received by the mock relay.
#[derive(Clone, Debug)]
pub struct Sent {
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct MockProvider {
    location: std::result::Result<GeoPoint, LocationError>,
    relay: Relay,
    position_requests: Arc<Mutex<usize>>,
    sent: Arc<Mutex<Vec<Sent>>>,
}

impl MockProvider {
    #[must_use]
    pub fn new(location: std::result::Result<GeoPoint, LocationError>, relay: Relay) -> Self {
        Self {
            location,
            relay,
            position_requests: Arc::new(Mutex::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Located at (-23.55, -46.63) with a relay answering `200 {"success":true,...}`.
    #[must_use]
    pub fn accepting() -> Self {
        Self::new(
            Ok(GeoPoint::new(-23.55, -46.63)),
            Relay::Respond(StatusCode::OK, r#"{"success":true,"coamoResponse":{"id":42}}"#),
        )
    }

    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn position_requests(&self) -> usize {
        *self.position_requests.lock().expect("lock")
    }

    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().expect("lock").clone()
    }
}

impl Geolocation for MockProvider {
    async fn current_position(
        &self, _options: &PositionOptions,
    ) -> checkin_location::Result<GeoPoint> {
        *self.position_requests.lock().expect("lock") += 1;
        self.location
    }
}

impl HttpRequest for MockProvider {
    async fn fetch(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
        let (parts, body) = request.into_parts();
        let sent = Sent { uri: parts.uri.to_string(), headers: parts.headers, body };
        self.sent.lock().expect("lock").push(sent);

        match &self.relay {
            Relay::Respond(status, body) => Response::builder()
                .status(*status)
                .body(Bytes::from_static(body.as_bytes()))
                .context("failed to build response"),
            Relay::Unreachable => Err(anyhow!("connection refused")),
            Relay::Silent => future::pending().await,
        }
    }
}

impl Clock for MockProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 19, 12, 0, 0).unwrap()
    }
}
