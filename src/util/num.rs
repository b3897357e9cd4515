/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Returns the integer an `f64` represents, if it represents one exactly.
///
/// The value must be finite, have no fractional part, and lie within
/// `±MAX_SAFE_I64_INT` so that the conversion is lossless. Negative zero maps
/// to `0`.
///
/// ## Example
/// ```
/// use symcalc::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(42.0), Some(42));
/// assert_eq!(f64_to_i64_exact(-0.0), Some(0));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn exact_conversion_rejects_unsafe_magnitudes() {
        assert_eq!(f64_to_i64_exact(MAX_SAFE_I64_INT as f64), Some(MAX_SAFE_I64_INT));
        assert_eq!(f64_to_i64_exact(1e300), None);
        assert_eq!(f64_to_i64_exact(f64::NAN), None);
    }
}
