#![forbid(unsafe_code)]

//! Rounding and CSS number formatting.
//!
//! Every magnitude that ends up in emitted CSS goes through
//! [`round_to_precision`] and [`format_number`], so output is stable across
//! platforms: half-up rounding (toward positive infinity) and the shortest
//! decimal form that round-trips, with no trailing `.0`.

/// Default number of decimal places kept in emitted CSS values.
pub const DEFAULT_PRECISION: u32 = 3;

/// Round `value` to `digits` decimal places, half-up.
///
/// Returns `None` when `value` (or the scaled intermediate) is not finite.
#[must_use]
pub fn round_to_precision(value: f64, digits: u32) -> Option<f64> {
    let base = 10f64.powi(digits as i32);
    let scaled = value * base;
    if !scaled.is_finite() {
        return None;
    }
    // `scaled - floor` is exact, so the tie test does not drift.
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    Some(rounded / base)
}

/// Round to [`DEFAULT_PRECISION`] places.
#[inline]
#[must_use]
pub fn round3(value: f64) -> Option<f64> {
    round_to_precision(value, DEFAULT_PRECISION)
}

/// Format a number the way it should appear in a CSS declaration.
///
/// Integral values print without a fractional part (`33`, not `33.0`) and
/// negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
