//! # Location Errors

use thiserror::Error;

/// Why a position could not be obtained.
///
/// Each variant renders a distinct operator-facing message.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// The operator or the OS refused location access.
    #[error("location permission denied")]
    PermissionDenied,

    /// The positioning service could not produce a fix.
    #[error("location service unavailable")]
    PositionUnavailable,

    /// No fix arrived before the request deadline.
    #[error("timed out while obtaining the location")]
    Timeout,

    /// The host has no location capability at all.
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

impl LocationError {
    /// Returns the stable error code associated with the variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::PositionUnavailable => "position_unavailable",
            Self::Timeout => "timeout",
            Self::Unsupported => "unsupported",
        }
    }
}
