//! Threshold parsing.
//!
//! The threshold is optional. An empty field means "let the service decide";
//! anything else must be a plain decimal number in the open interval (-1, 1).

use lazy_static::lazy_static;
use regex::Regex;

use super::InputError;

/// Hint shown next to the threshold field.
pub const THRESHOLD_HINT: &str = "Threshold must be a number between -1 and 1";

lazy_static! {
    /// Decimal literal: optional sign, digits with optional fraction (or a
    /// bare fraction), optional exponent. Rejects `inf`, `NaN` and hex forms
    /// that `f64::from_str` or browsers would otherwise let through.
    static ref DECIMAL_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$"
    ).unwrap();
}

/// Parse the raw threshold field.
///
/// Returns `Ok(None)` when the field is blank, `Ok(Some(v))` for
/// `-1 < v < 1`, and an [`InputError`] otherwise. Surrounding whitespace is
/// ignored.
pub fn parse_threshold(raw: &str) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !DECIMAL_PATTERN.is_match(trimmed) {
        return Err(InputError::InvalidThreshold(raw.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidThreshold(raw.to_string()))?;

    if value <= -1.0 || value >= 1.0 {
        return Err(InputError::ThresholdOutOfRange(value));
    }

    Ok(Some(value))
}
