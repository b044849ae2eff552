//! Decimal rounding used to suppress floating noise in computed results.

/// Number of decimal digits kept when cleaning roots and expanded coefficients.
pub const NOISE_DIGITS: u32 = 12;

/// Rounds `value` to `digits` decimal places, ties to even.
///
/// Values whose scaled magnitude can no longer carry a fractional part are
/// returned unchanged, as are NaN and infinities.
///
/// # Example
///
/// ```rust
/// use polylib_core::round_to;
///
/// assert_eq!(round_to(1.000_000_000_000_4, 12), 1.0);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// ```
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;

    // 2^52: beyond this every f64 is already an integer
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }

    scaled.round_ties_even() / factor
}
