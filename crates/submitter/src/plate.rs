//! Vehicle plate input normalization.

/// Longest plate accepted, e.g. `ABC1234`.
pub const MAX_PLATE_LEN: usize = 7;

/// Normalize raw operator input into a plate.
///
/// Drops everything that is not an ASCII letter or digit, uppercases the rest
/// and keeps at most [`MAX_PLATE_LEN`] characters. Safe to apply on every
/// keystroke: normalizing an already normalized plate returns it unchanged.
#[must_use]
pub fn normalize_plate(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_PLATE_LEN)
        .collect()
}
