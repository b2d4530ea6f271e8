//! burnin-series: NaN-aware smoothing and statistics for instrument series
//!
//! This crate provides the numeric core for analyzing instrument burn-in
//! logs: ordered time/value series in which any sample may be missing,
//! marked by the IEEE-754 NaN sentinel. Missing samples appear both in the
//! raw logs (dropped readings) and, systematically, after splitting an
//! error series by direction for per-direction analysis.
//!
//! # Features
//!
//! - **Missing-tolerant smoothing**: a centered moving average that omits
//!   missing samples per window instead of propagating them
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Pure functions**: inputs are never mutated; no shared state, safe to
//!   call from multiple threads without coordination
//! - **Safety**: typed errors for invalid windows and degenerate inputs
//!
//! # Quick Start
//!
//! ```
//! use burnin_series::prelude::*;
//!
//! let values = vec![1.0_f64, f64::NAN, 3.0, f64::NAN, 5.0];
//! let result = smooth(&values, 3).unwrap();
//!
//! // Gaps are averaged around, not propagated
//! assert!((result[1] - 2.0).abs() < 1e-10);
//! assert!((result[3] - 4.0).abs() < 1e-10);
//! ```
//!
//! # Series Pipeline
//!
//! The typical analysis works through [`series::TimeSeries`]: load a log
//! into a labeled series, split it by error direction, then smooth and
//! summarize each direction:
//!
//! ```
//! use burnin_series::prelude::*;
//!
//! let series = TimeSeries::new(
//!     "axis A error",
//!     vec![0.0_f64, 1.0, 2.0, 3.0],
//!     vec![12.0_f64, -48.0, 55.0, -3.0],
//! )
//! .unwrap();
//!
//! let positive = series.positive();
//! let display = positive.smoothed(3).unwrap();
//! let report = SummaryStats::from_values(series.values(), 40.0).unwrap();
//!
//! assert_eq!(display.len(), series.len());
//! assert_eq!(report.valid_count, 4);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, Error>`]:
//!
//! ```
//! use burnin_series::prelude::*;
//!
//! // A zero window is rejected, never clamped
//! let result = smooth(&[1.0_f64, 2.0], 0);
//! assert!(result.is_err());
//!
//! // Statistics over all-missing input fail rather than returning NaN
//! let result = nan_mean(&[f64::NAN, f64::NAN]);
//! assert!(result.is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod prelude;
pub mod series;
pub mod smoothing;
pub mod stats;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use series::TimeSeries;
pub use smoothing::{smooth, smooth_into};
pub use stats::SummaryStats;
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_relative, count_missing, EPSILON, LOOSE_EPSILON};
