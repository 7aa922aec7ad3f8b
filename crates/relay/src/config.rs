use std::env;
use std::time::Duration;

use tracing::warn;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Relay configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Upstream check-in endpoint. `None` leaves the relay running but
    /// failing every check-in as misconfigured.
    pub upstream_url: Option<String>,
    /// Deadline for the upstream call, from request to full response body.
    pub timeout: Duration,
}

impl RelayConfig {
    #[must_use]
    pub fn new(upstream_url: Option<String>) -> Self {
        Self {
            upstream_url: upstream_url.filter(|url| !url.trim().is_empty()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `COAMO_API_URL` and `UPSTREAM_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from `lookup`, which resolves a variable name to
    /// its value. An unparseable or zero timeout uses the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = lookup("UPSTREAM_TIMEOUT_SECS").map_or(DEFAULT_TIMEOUT_SECS, |value| {
            parse_secs(&value).unwrap_or_else(|| {
                warn!("UPSTREAM_TIMEOUT_SECS `{value}` is invalid, using {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            })
        });

        Self::new(lookup("COAMO_API_URL")).with_timeout(Duration::from_secs(timeout))
    }
}

fn parse_secs(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
