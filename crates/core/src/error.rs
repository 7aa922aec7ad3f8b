//! Error helpers shared across the check-in crates.

/// Flattens an error and its causes into a single `outer -> inner` line,
/// suitable for a log field or an error response body.
#[must_use]
pub fn chain(err: &anyhow::Error) -> String {
    err.chain().map(ToString::to_string).collect::<Vec<_>>().join(" -> ")
}
