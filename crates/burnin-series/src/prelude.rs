//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use burnin_series::prelude::*;
//!
//! let values = vec![1.0_f64, f64::NAN, 3.0, f64::NAN, 5.0];
//!
//! let smoothed = smooth(&values, 3).unwrap();
//! let mean = nan_mean(&values).unwrap();
//! assert!((mean - 3.0).abs() < 1e-10);
//! ```
//!
//! # Contents
//!
//! - [`Error`] / [`Result`]: crate-wide error handling
//! - [`SeriesElement`]: trait for numeric types usable in series
//! - [`smooth`] / [`smooth_into`]: centered missing-tolerant moving average
//! - [`TimeSeries`]: labeled time/value container
//! - [`SummaryStats`] and the `nan_*` statistics functions

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{validate_window, SeriesElement};

// Smoothing
pub use crate::smoothing::{smooth, smooth_into};

// Series container
pub use crate::series::TimeSeries;

// Statistics
pub use crate::stats::{
    count_peaks, kurtosis, nan_mean, nan_median, nan_percentile, nan_std, nan_variance, skewness,
    SummaryStats,
};

// Comparison utilities
pub use crate::utils::{approx_eq, approx_eq_relative, count_missing, EPSILON, LOOSE_EPSILON};
