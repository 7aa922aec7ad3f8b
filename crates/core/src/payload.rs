//! # Check-in wire types
//!
//! The JSON records exchanged between client, relay and upstream. Field names
//! are the upstream's canonical names and must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PLATE: &str = "NR_PLACA";
pub const TIMESTAMP: &str = "DT_POSICAO";
pub const LATITUDE: &str = "NR_LATITUDE";
pub const LONGITUDE: &str = "NR_LONGITUDE";

/// A single vehicle check-in as sent to the relay and forwarded upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInPayload {
    /// Normalized vehicle plate, e.g. `ABC1234`.
    #[serde(rename = "NR_PLACA")]
    pub vehicle_plate: String,

    /// Civil date-time of the fix, `DD/MM/YYYY HH:MM:SS`.
    #[serde(rename = "DT_POSICAO")]
    pub position_timestamp: String,

    #[serde(rename = "NR_LATITUDE")]
    pub latitude: String,

    #[serde(rename = "NR_LONGITUDE")]
    pub longitude: String,
}

impl CheckInPayload {
    /// Names of the fields that are empty, in wire order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (PLATE, &self.vehicle_plate),
            (TIMESTAMP, &self.position_timestamp),
            (LATITUDE, &self.latitude),
            (LONGITUDE, &self.longitude),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.is_empty().then_some(name))
        .collect()
    }

    /// Extract a payload from an arbitrary JSON document.
    ///
    /// A field counts as missing when it is absent, not a string, or empty.
    ///
    /// # Errors
    ///
    /// Returns the names of every missing field.
    pub fn from_json(value: &Value) -> Result<Self, Vec<&'static str>> {
        let field = |name: &str| {
            value.get(name).and_then(Value::as_str).unwrap_or_default().to_string()
        };

        let payload = Self {
            vehicle_plate: field(PLATE),
            position_timestamp: field(TIMESTAMP),
            latitude: field(LATITUDE),
            longitude: field(LONGITUDE),
        };

        let missing = payload.missing_fields();
        if missing.is_empty() { Ok(payload) } else { Err(missing) }
    }
}

/// Response body returned by the relay for every request, success or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayReply {
    pub success: bool,

    /// Upstream response, or `{"raw": "<text>"}` when it was not JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coamo_response: Option<Value>,

    /// Short operator-facing description of a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Upstream HTTP status, when upstream rejected the check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Unmodified upstream response body, when upstream rejected the check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Internal fault description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayReply {
    #[must_use]
    pub fn success(upstream: Value) -> Self {
        Self { success: true, coamo_response: Some(upstream), ..Self::default() }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()), ..Self::default() }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
