//! Utility functions for burnin-series.
//!
//! Tolerance-based floating-point comparison and missing-sample counting,
//! shared by the test suites and exposed for user convenience. The
//! comparison helpers treat two missing markers as equal, which is what a
//! test asserting "this position is still missing" wants.
//!
//! # Example
//!
//! ```
//! use burnin_series::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
///
/// This tolerance (1e-10) is appropriate for single-window means where
/// accumulated floating-point error is minimal.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated operations.
///
/// Use this tolerance (1e-6) when comparing results built from many
/// accumulated operations, such as higher central moments.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or
/// if both are the missing marker.
///
/// # Example
///
/// ```
/// use burnin_series::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
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
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Returns `true` if the relative difference between `a` and `b` is less
/// than `rel_tolerance`, or if both are the missing marker. More
/// appropriate than absolute tolerance when magnitudes vary widely, as
/// error counts on long burn-in runs do.
///
/// # Example
///
/// ```
/// use burnin_series::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(approx_eq_relative(1e-10, 1.000000001e-10, 1e-8));
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

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Count the number of missing samples in a slice.
///
/// # Example
///
/// ```
/// use burnin_series::utils::count_missing;
///
/// let data = vec![f64::NAN, 1.0, f64::NAN, 2.0];
/// assert_eq!(count_missing(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_missing<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}
