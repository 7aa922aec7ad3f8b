//! Position timestamps in the upstream's civil time format.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Civil time zone the upstream expects timestamps in.
pub const TIME_ZONE: Tz = chrono_tz::America::Sao_Paulo;

/// `DD/MM/YYYY HH:MM:SS`, 24-hour clock. Upstream rejects anything else.
const FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Render `instant` as a civil date-time in [`TIME_ZONE`].
#[must_use]
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&TIME_ZONE).format(FORMAT).to_string()
}

/// The current wall-clock time rendered by [`format_timestamp`].
#[must_use]
pub fn current_local_timestamp() -> String {
    format_timestamp(Utc::now())
}
