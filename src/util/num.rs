/// Significant digits kept by the full-precision comparison.
pub const PRECISION: usize = 14;
/// Significant digits kept by the reduced-precision comparison.
pub const MIDDLE_PRECISION: usize = 7;
/// Components smaller than this in magnitude are treated as zero.
pub const EPSILON: f64 = 1e-15;

/// Rounds `value` to `digits` significant digits.
///
/// Goes through the decimal exponent notation, so the result is the `f64`
/// closest to the rounded decimal rather than an approximation of it.
///
/// # Example
/// ```
/// use complexa::util::num::to_precision;
///
/// assert_eq!(to_precision(3.14159, 3), 3.14);
/// assert_eq!(to_precision(1234.5, 2), 1200.0);
/// ```
#[must_use]
pub fn to_precision(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value).parse().unwrap_or(value)
}

/// Rounds `value` to a fixed number of decimal places.
///
/// Halves round away from zero. Values whose scaled form overflows are
/// returned unchanged.
///
/// # Example
/// ```
/// use complexa::util::num::round_decimals;
///
/// assert_eq!(round_decimals(1.25, 1), 1.3);
/// assert_eq!(round_decimals(-5.678, 2), -5.68);
/// assert_eq!(round_decimals(42.4, 0), 42.0);
/// ```
#[must_use]
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Applies the component rounding rule of the complex constructor.
///
/// Components within [`EPSILON`] of zero become zero. A component that reads
/// the same at [`PRECISION`] and at [`MIDDLE_PRECISION`] significant digits
/// is considered exact at the reduced precision and is rounded to
/// `PRECISION - 2` decimals, which removes accumulated floating-point noise
/// such as `5.000000000000001`.
///
/// # Example
/// ```
/// use complexa::util::num::snap;
///
/// assert_eq!(snap(5.000000000000001), 5.0);
/// assert_eq!(snap(0.1 + 0.2), 0.3);
/// assert_eq!(snap(6.123233995736766e-17), 0.0);
/// assert_eq!(snap(std::f64::consts::PI), std::f64::consts::PI);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn snap(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value.abs() < EPSILON {
        return 0.0;
    }
    if to_precision(value, PRECISION) == to_precision(value, MIDDLE_PRECISION) {
        return round_decimals(value, (PRECISION - 2) as i32);
    }
    value
}

/// Converts `value` to a `u32` if it is a finite, non-negative whole number
/// that fits.
///
/// # Example
/// ```
/// use complexa::util::num::f64_to_u32_checked;
///
/// assert_eq!(f64_to_u32_checked(3.0), Some(3));
/// assert_eq!(f64_to_u32_checked(2.5), None);
/// assert_eq!(f64_to_u32_checked(-1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_u32_checked(value: f64) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
