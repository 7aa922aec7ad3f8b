use std::time::Duration;

use tracing::{debug, warn};

use crate::{LocationError, Result};

/// A geographic fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Options for a single "get current position" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// Deadline for the fix to arrive.
    pub timeout: Duration,
    /// Oldest cached fix that may be returned. Zero demands a fresh fix.
    pub maximum_age: Duration,
}

/// The accuracy/latency profile used for one acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// High accuracy, short deadline, no cached fixes.
    Precise,
    /// Low accuracy, longer deadline, cached fixes up to five minutes old.
    Degraded,
}

impl Tier {
    #[must_use]
    pub const fn options(self) -> PositionOptions {
        match self {
            Self::Precise => PositionOptions {
                enable_high_accuracy: true,
                timeout: Duration::from_secs(12),
                maximum_age: Duration::ZERO,
            },
            Self::Degraded => PositionOptions {
                enable_high_accuracy: false,
                timeout: Duration::from_secs(25),
                maximum_age: Duration::from_secs(5 * 60),
            },
        }
    }
}

/// The device geolocation provider.
pub trait Geolocation: Send + Sync {
    /// Whether the host has any location capability. When `false` no request
    /// is attempted.
    fn is_supported(&self) -> bool {
        true
    }

    /// Get the current position once.
    fn current_position(
        &self, options: &PositionOptions,
    ) -> impl Future<Output = Result<GeoPoint>> + Send;
}

/// Acquire a fix, falling back from [`Tier::Precise`] to [`Tier::Degraded`].
///
/// The degraded tier is only attempted when the precise tier fails. When both
/// fail, the degraded tier's error is returned.
///
/// # Errors
///
/// Returns [`LocationError::Unsupported`] immediately when the provider has no
/// location capability, otherwise the error from the degraded attempt.
pub async fn acquire_location(provider: &impl Geolocation) -> Result<GeoPoint> {
    if !provider.is_supported() {
        return Err(LocationError::Unsupported);
    }

    match attempt(provider, Tier::Precise).await {
        Ok(point) => Ok(point),
        Err(err) => {
            warn!(monotonic_counter.location_fallbacks = 1, reason = err.code(), "precise fix failed");
            attempt(provider, Tier::Degraded).await
        }
    }
}

// The deadline is enforced here as well as handed to the provider, so a
// provider that ignores `timeout` still yields `Timeout`.
async fn attempt(provider: &impl Geolocation, tier: Tier) -> Result<GeoPoint> {
    let options = tier.options();
    debug!(?tier, "requesting position");

    match tokio::time::timeout(options.timeout, provider.current_position(&options)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(LocationError::Timeout),
    }
}
