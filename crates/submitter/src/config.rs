use std::env;
use std::time::Duration;

use tracing::warn;

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/postCheckIn";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Deployment settings for the check-in submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// Relay check-in endpoint.
    pub endpoint: String,
    /// When `true`, a check-in without a credential fails validation.
    pub require_credential: bool,
    /// Deadline for the relay call, from request to full response body.
    pub timeout: Duration,
}

impl SubmitterConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            require_credential: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub const fn with_required_credential(mut self, required: bool) -> Self {
        self.require_credential = required;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `CHECKIN_ENDPOINT`, `CHECKIN_REQUIRE_CREDENTIAL` and
    /// `CHECKIN_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from `lookup`, which resolves a variable name to
    /// its value.
    ///
    /// An unrecognised `CHECKIN_REQUIRE_CREDENTIAL` value requires a
    /// credential. An unparseable or zero timeout uses the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("CHECKIN_ENDPOINT").filter(|value| !value.trim().is_empty());
        let endpoint = endpoint.unwrap_or_else(|| {
            tracing::trace!("CHECKIN_ENDPOINT not set, using default: {DEFAULT_ENDPOINT}");
            DEFAULT_ENDPOINT.to_string()
        });

        let require_credential = lookup("CHECKIN_REQUIRE_CREDENTIAL").is_some_and(|value| {
            parse_flag(&value).unwrap_or_else(|| {
                warn!("CHECKIN_REQUIRE_CREDENTIAL `{value}` not recognised, requiring credential");
                true
            })
        });

        let timeout = lookup("CHECKIN_TIMEOUT_SECS").map_or(DEFAULT_TIMEOUT_SECS, |value| {
            parse_secs(&value).unwrap_or_else(|| {
                warn!("CHECKIN_TIMEOUT_SECS `{value}` is invalid, using {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            })
        });

        Self::new(endpoint)
            .with_required_credential(require_credential)
            .with_timeout(Duration::from_secs(timeout))
    }
}

/// Parse a boolean switch. Blank counts as off, anything unrecognised is `None`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "0" | "no" | "n" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_secs(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
