//! Core traits for burnin-series numeric operations.
//!
//! The primary trait is [`SeriesElement`], which provides a common interface
//! for numeric operations on sampled series data, abstracting over `f32` and
//! `f64`. Samples use the IEEE-754 NaN bit pattern as the "missing" marker,
//! so the trait leans on `num_traits::Float` for NaN construction and
//! detection.

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a sampled series.
///
/// Extends `num_traits::Float` with the conversions this crate needs when
/// turning sample counts and percentile ranks into element values.
///
/// # Type Bounds
///
/// - `Float`: standard floating-point operations (NaN handling, arithmetic)
/// - `NumCast`: safe conversion between numeric types
/// - `Copy`, `Default`, `Send`, `Sync`: value semantics and thread safety
///
/// # Example
///
/// ```
/// use burnin_series::traits::SeriesElement;
///
/// fn sum_present<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().fold(T::zero(), |acc, &x| {
///         if x.is_nan() { acc } else { acc + x }
///     })
/// }
///
/// let data = vec![1.0_f64, 2.0, f64::NAN, 4.0];
/// assert!((sum_present(&data) - 7.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Commonly used for converting window sizes and sample counts to the
    /// element type before division.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for the threshold exceedance percentages in summary statistics.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }

    /// Returns true when this sample carries a real measurement.
    ///
    /// The inverse of `is_nan`, named for the missing-marker convention the
    /// rest of the crate is written in.
    #[inline]
    #[must_use]
    fn is_present(self) -> bool {
        !self.is_nan()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a smoothing window is usable.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero. The window is never
/// clamped.
#[inline]
pub const fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        Err(Error::InvalidWindow {
            window,
            reason: "window must be at least 1",
        })
    } else {
        Ok(())
    }
}
