//! Relay errors

use axum::Json;
use axum::response::{IntoResponse, Response};
use checkin_core::{RelayReply, chain};
use http::StatusCode;
use thiserror::Error;

/// Why the relay could not deliver a check-in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// One or more payload fields are missing or empty. Never forwarded.
    #[error("code: 400, description: invalid payload, missing {0}")]
    InvalidPayload(String),

    /// The upstream endpoint is not configured.
    #[error("code: 500, description: COAMO_API_URL is not configured")]
    Misconfigured,

    /// Upstream answered with a non-success status.
    #[error("code: 502, description: upstream returned {status}")]
    Upstream { status: u16, body: String },

    /// Any other fault: unreadable request, network failure, deadline.
    #[error("code: 500, description: {0}")]
    Internal(String),
}

impl RelayError {
    /// Returns the HTTP status reported to the caller.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Misconfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable error code associated with the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "invalid_payload",
            Self::Misconfigured => "misconfigured",
            Self::Upstream { .. } => "upstream_error",
            Self::Internal(_) => "internal",
        }
    }

    /// The response body reported to the caller.
    #[must_use]
    pub fn reply(&self) -> RelayReply {
        match self {
            Self::InvalidPayload(fields) => {
                RelayReply::failure(format!("invalid payload, missing {fields}"))
            }
            Self::Misconfigured => RelayReply::failure("COAMO_API_URL is not configured"),
            Self::Upstream { status, body } => RelayReply::failure("upstream API error")
                .with_status(*status)
                .with_details(body.clone()),
            Self::Internal(err) => RelayReply::failure("internal relay error").with_error(err.clone()),
        }
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(err: anyhow::Error) -> Self {
        // keep classified errors, adding context to internal ones
        match err.downcast_ref::<Self>() {
            Some(Self::Internal(_)) | None => Self::Internal(chain(&err)),
            Some(inner) => inner.clone(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.reply())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn error_display() {
        let err = RelayError::InvalidPayload("NR_PLACA".to_string());
        assert_eq!(err.to_string(), "code: 400, description: invalid payload, missing NR_PLACA");
    }

    #[test]
    fn status_classes() {
        assert_eq!(RelayError::InvalidPayload(String::new()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::Misconfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            RelayError::Upstream { status: 404, body: String::new() }.status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(RelayError::Internal(String::new()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn anyhow_context() {
        let result = Err::<(), anyhow::Error>(anyhow!("connection refused")).context("calling upstream");
        let err: RelayError = result.unwrap_err().into();

        assert_eq!(err, RelayError::Internal("calling upstream -> connection refused".to_string()));
    }

    #[test]
    fn keeps_classified_error() {
        let result = Err::<(), RelayError>(RelayError::Misconfigured).context("relaying");
        let err: RelayError = result.unwrap_err().into();

        assert_eq!(err, RelayError::Misconfigured);
    }

    #[test]
    fn serde_context() {
        let result: anyhow::Result<Value> =
            serde_json::from_str(r#"{"foo": "bar""#).context("parsing check-in request body");
        let err: RelayError = result.unwrap_err().into();

        assert_eq!(
            err.to_string(),
            "code: 500, description: parsing check-in request body -> EOF while parsing an object at line 1 column 13"
        );
    }

    #[tokio::test]
    async fn upstream_response_body() {
        let err = RelayError::Upstream { status: 503, body: "maintenance".to_string() };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = response.into_body().collect().await.expect("should read body").to_bytes();
        let body: Value = serde_json::from_slice(&bytes).expect("should deserialize");
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "upstream API error",
                "status": 503,
                "details": "maintenance"
            })
        );
    }

    #[tokio::test]
    async fn misconfigured_response_body() {
        let response = RelayError::Misconfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.expect("should read body").to_bytes();
        let body: Value = serde_json::from_slice(&bytes).expect("should deserialize");
        assert_eq!(body, json!({"success": false, "message": "COAMO_API_URL is not configured"}));
    }
}
