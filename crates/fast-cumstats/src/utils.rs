//! Comparison helpers for cumulative outputs.
//!
//! Cumulative folds accumulate rounding error along the series, so checks on
//! their outputs usually need a tolerance. The exception is comparing two
//! evaluations of the same fold (for instance the batch pass against a single
//! statistic), which must agree bit for bit; [`bitwise_eq`] covers that case.
//!
//! # Example
//!
//! ```
//! use fast_cumstats::utils::{approx_eq, EPSILON};
//!
//! let a = 0.1 + 0.2;
//! assert!(approx_eq(a, 0.3, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// # Example
///
/// ```
/// use fast_cumstats::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a == b {
        // Covers matching infinities, whose difference is NaN.
        return true;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Growth products span many orders of magnitude, where an absolute
/// tolerance is meaningless.
///
/// # Example
///
/// ```
/// use fast_cumstats::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(!approx_eq_relative(1.0, 1.1, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());
    diff / max_abs < rel_tolerance
}

/// Returns `true` if both slices have the same length and identical bit
/// patterns at every position.
///
/// Unlike `==`, NaN compares equal to a NaN with the same payload and `-0.0`
/// differs from `0.0`.
///
/// # Example
///
/// ```
/// use fast_cumstats::utils::bitwise_eq;
///
/// assert!(bitwise_eq(&[1.0_f64, f64::NAN], &[1.0, f64::NAN]));
/// assert!(!bitwise_eq(&[0.0_f64], &[-0.0]));
/// ```
#[must_use]
pub fn bitwise_eq<T: SeriesElement>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&x, &y)| x.integer_decode() == y.integer_decode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0_f64, 1.0, EPSILON));
        assert!(approx_eq(1.0_f64, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(!approx_eq(1.0, f64::NAN, EPSILON));
    }

    #[test]
    fn test_approx_eq_infinity() {
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, EPSILON));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, EPSILON));
        assert!(!approx_eq(f64::INFINITY, 1.0, EPSILON));
    }

    #[test]
    fn test_approx_eq_f32() {
        assert!(approx_eq(1.0_f32, 1.0, 1e-5));
        assert!(!approx_eq(1.0_f32, 2.0, 1e-5));
    }

    #[test]
    fn test_approx_eq_relative() {
        assert!(approx_eq_relative(1.0_f64, 1.0, 1e-10));
        assert!(approx_eq_relative(1e10_f64, 1e10 + 1.0, 1e-9));
        assert!(!approx_eq_relative(1.0_f64, 2.0, 1e-10));
        assert!(approx_eq_relative(0.0_f64, 0.0, 1e-10));
        assert!(!approx_eq_relative(0.0_f64, 1e-11, 1e-10));
    }

    #[test]
    fn test_bitwise_eq() {
        assert!(bitwise_eq::<f64>(&[], &[]));
        assert!(bitwise_eq(&[1.5_f64, -2.0], &[1.5, -2.0]));
        assert!(!bitwise_eq(&[1.5_f64], &[1.5, 2.0]));
        assert!(!bitwise_eq(&[0.1_f64 + 0.2], &[0.3]));
        assert!(bitwise_eq(&[f64::NAN], &[f64::NAN]));
        assert!(!bitwise_eq(&[f64::NAN], &[1.0]));
        assert!(!bitwise_eq(&[0.0_f64], &[-0.0]));
    }
}
