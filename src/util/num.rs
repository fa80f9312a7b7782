/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `i64` to the nearest `f64`.
///
/// Values up to [`MAX_SAFE_I64_INT`] in magnitude convert exactly; larger
/// ones round to the nearest representable real, ties to even.
///
/// ## Example
/// ```
/// use polite::util::num::{MAX_SAFE_I64_INT, i64_to_f64};
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(MAX_SAFE_I64_INT + 2), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Compares an integer with a real by exact value.
///
/// Unlike `value as f64 == real`, this never reports two different numbers
/// as equal because of rounding: the real must be integral, in range, and
/// convert back to exactly `value`.
///
/// ## Example
/// ```
/// use polite::util::num::i64_equals_f64;
///
/// assert!(i64_equals_f64(2, 2.0));
/// assert!(!i64_equals_f64(2, 2.5));
/// assert!(!i64_equals_f64(i64::MAX, f64::INFINITY));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn i64_equals_f64(value: i64, real: f64) -> bool {
    // i64::MIN is a power of two, so both bounds are exact.
    let lower = i64::MIN as f64;
    real.fract() == 0.0 && real >= lower && real < -lower && real as i64 == value
}
