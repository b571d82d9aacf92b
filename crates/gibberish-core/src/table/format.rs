//! Display and ordering helpers for table cells.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fixed-point rendering with `digits` decimals.
///
/// Exact halfway values round away from zero (`0.015625` → `0.01563` at five
/// digits) where `format!` would round half to even. Negative zero renders
/// without a sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();

    // Scaling by a power of two is exact, so an odd integer here means the
    // value has exactly `digits + 1` decimals ending in 5.
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    let magnitude = if scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };

    let body = format!("{:.*}", digits, magnitude);
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Compare two names the way a user expects a sorted list of names to read.
///
/// Base letters are compared first ignoring accents and case, then accents
/// (unaccented first), then case (lowercase first), then raw code points.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}
