//! Labeled time/value series container.
//!
//! A [`TimeSeries`] pairs an ordered sequence of timestamps with an equally
//! long sequence of sampled values, under a display label. Values may carry
//! the NaN missing marker at any position; timestamps are assumed present.
//! The container is the unit the surrounding analysis works in: a burn-in
//! log is loaded into one series, split by error direction into two, and
//! each is smoothed for display.
//!
//! All derivations return fresh series; a `TimeSeries` is never mutated
//! after construction.

use crate::error::{Error, Result};
use crate::smoothing;
use crate::traits::SeriesElement;

/// An ordered, labeled time/value series with optional missing samples.
///
/// # Example
///
/// ```
/// use burnin_series::series::TimeSeries;
///
/// let series = TimeSeries::new(
///     "axis A error",
///     vec![0.0_f64, 1.0, 2.0, 3.0],
///     vec![5.0_f64, -2.0, f64::NAN, 7.0],
/// )
/// .unwrap();
///
/// assert_eq!(series.len(), 4);
/// let smoothed = series.smoothed(3).unwrap();
/// assert_eq!(smoothed.len(), 4);
/// assert_eq!(smoothed.time(), series.time());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    label: String,
    time: Vec<T>,
    values: Vec<T>,
}

impl<T: SeriesElement> TimeSeries<T> {
    /// Creates a series from a label and matching time/value sequences.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the sequences differ in length.
    /// Empty series are valid.
    pub fn new(label: impl Into<String>, time: Vec<T>, values: Vec<T>) -> Result<Self> {
        if time.len() != values.len() {
            return Err(Error::LengthMismatch {
                time: time.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            label: label.into(),
            time,
            values,
        })
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the timestamp sequence.
    #[must_use]
    pub fn time(&self) -> &[T] {
        &self.time
    }

    /// Returns the value sequence, missing markers included.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a copy of this series with the values smoothed by a centered
    /// moving average.
    ///
    /// Timestamps and label are carried over unchanged; see
    /// [`smoothing::smooth`] for the window semantics.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if `window` is zero.
    pub fn smoothed(&self, window: usize) -> Result<Self> {
        Ok(Self {
            label: self.label.clone(),
            time: self.time.clone(),
            values: smoothing::smooth(&self.values, window)?,
        })
    }

    /// Returns a copy holding only the strictly positive samples.
    ///
    /// Non-positive and missing samples are replaced by the missing marker,
    /// so the result stays aligned with the original timestamps.
    #[must_use]
    pub fn positive(&self) -> Self {
        self.masked(" (positive)", |v| v > T::zero())
    }

    /// Returns a copy holding only the strictly negative samples.
    ///
    /// Non-negative and missing samples are replaced by the missing marker,
    /// so the result stays aligned with the original timestamps.
    #[must_use]
    pub fn negative(&self) -> Self {
        self.masked(" (negative)", |v| v < T::zero())
    }

    fn masked(&self, suffix: &str, keep: impl Fn(T) -> bool) -> Self {
        let values = self
            .values
            .iter()
            .map(|&v| if v.is_present() && keep(v) { v } else { T::nan() })
            .collect();
        Self {
            label: format!("{}{suffix}", self.label),
            time: self.time.clone(),
            values,
        }
    }
}
