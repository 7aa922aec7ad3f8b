//! # Submission Errors

use checkin_location::LocationError;
use thiserror::Error;

/// Why a check-in attempt failed. `Display` is the operator-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Plate is empty after normalization. No I/O was attempted.
    #[error("enter the vehicle plate")]
    MissingPlate,

    /// This deployment requires a credential and none was given. No I/O was
    /// attempted.
    #[error("an access token is required")]
    MissingCredential,

    /// Neither location tier produced a fix.
    #[error(transparent)]
    LocationFailed(#[from] LocationError),

    /// The relay answered with a non-success status.
    #[error("check-in failed: {status} {body}")]
    UpstreamRejected { status: u16, body: String },

    /// The relay could not be reached, or did not answer in time.
    #[error("check-in service unreachable: {0}")]
    Transport(String),

    /// The relay answered with success but the body was not JSON.
    #[error("unreadable check-in response: {0}")]
    MalformedResponse(String),
}

impl SubmissionError {
    /// Returns the stable error code associated with the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingPlate => "missing_plate",
            Self::MissingCredential => "missing_credential",
            Self::LocationFailed(err) => err.code(),
            Self::UpstreamRejected { .. } => "upstream_rejected",
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }

    /// Whether the attempt was rejected before any device or network I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingPlate | Self::MissingCredential)
    }
}
