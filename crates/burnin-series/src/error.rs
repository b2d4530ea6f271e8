//! Error types for burnin-series.
//!
//! This module defines the error types used throughout the library
//! for handling various failure conditions.

use thiserror::Error;

/// The main error type for burnin-series operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The smoothing window is invalid.
    ///
    /// This error is returned when the window is zero. A window is never
    /// silently clamped to a usable value.
    #[error("invalid window {window}: {reason}")]
    InvalidWindow {
        /// The invalid window value that was provided.
        window: usize,
        /// Description of why the window is invalid.
        reason: &'static str,
    },

    /// A percentile rank outside the `[0, 100]` range was requested.
    #[error("invalid percentile {q}: must be within [0, 100]")]
    InvalidPercentile {
        /// The out-of-range rank that was requested.
        q: f64,
    },

    /// The time and value sequences of a series have different lengths.
    #[error("length mismatch: {time} time samples, {values} value samples")]
    LengthMismatch {
        /// Length of the time sequence.
        time: usize,
        /// Length of the value sequence.
        values: usize,
    },

    /// A pre-allocated output buffer is shorter than the input.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of elements required.
        required: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// A statistic was requested over input with no non-missing samples.
    ///
    /// Returned both for empty input and for input consisting entirely of
    /// NaN markers; neither admits a defined mean, median, or moment.
    #[error("no valid samples: {context}")]
    NoValidSamples {
        /// Description of the operation that found no usable data.
        context: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a sample count to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the burnin-series Error type.
pub type Result<T> = std::result::Result<T, Error>;
