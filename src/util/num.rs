use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if it is a whole number that the
/// `int` tag can hold exactly.
///
/// Used to re-tag whole-valued arithmetic results as integers.
///
/// ## Example
/// ```
/// use voidlang::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(512.0), Some(512));
/// assert_eq!(f64_to_i64_exact(0.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Floors an `f64` toward negative infinity and converts it to `i64`.
///
/// Non-finite values and values outside the `i64` range are rejected, since
/// neither can name an integer.
///
/// ## Errors
/// Returns `RuntimeError::ExpectedNumber` if the value is not finite or does
/// not fit in an `i64` after flooring.
///
/// ## Example
/// ```
/// use voidlang::util::num::f64_floor_to_i64;
///
/// assert_eq!(f64_floor_to_i64(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_floor_to_i64(-1.5, 1).unwrap(), -2);
/// assert!(f64_floor_to_i64(f64::INFINITY, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_floor_to_i64(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(RuntimeError::ExpectedNumber { value: value.to_string(),
                                                  line });
    }
    Ok(value.floor() as i64)
}
