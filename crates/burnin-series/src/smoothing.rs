//! Centered moving-average smoothing for series with missing samples.
//!
//! Instrument burn-in logs arrive as ordered error/time sequences in which
//! any sample may be the NaN missing marker (dropped readings, sign-masked
//! copies). This module smooths such a series with a centered moving average
//! that simply omits missing samples from each window instead of letting
//! them poison the output.
//!
//! # Algorithm
//!
//! For output position `i` with window `w`:
//!
//! 1. `half = w / 2` (integer floor division)
//! 2. The input range considered is `[i - half, i + half]` inclusive,
//!    clipped to the series bounds — no wraparound, no padding
//! 3. The output is the arithmetic mean of the non-missing values in that
//!    range, or the missing marker if the range holds none
//!
//! The output always has the same length as the input, missing markers are
//! preserved positionally, and the input is never mutated.
//!
//! # Example
//!
//! ```
//! use burnin_series::smoothing::smooth;
//!
//! let data = vec![1.0_f64, f64::NAN, 3.0, f64::NAN, 5.0];
//! let result = smooth(&data, 3).unwrap();
//!
//! // Every window straddles a gap, but the gaps are averaged around:
//! assert!((result[0] - 1.0).abs() < 1e-10); // mean of {1}
//! assert!((result[1] - 2.0).abs() < 1e-10); // mean of {1, 3}
//! assert!((result[2] - 3.0).abs() < 1e-10); // mean of {3}
//! assert!((result[3] - 4.0).abs() < 1e-10); // mean of {3, 5}
//! assert!((result[4] - 5.0).abs() < 1e-10); // mean of {5}
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_window, SeriesElement};

/// Computes a centered, missing-tolerant moving average of a series.
///
/// Returns a new vector of the same length as the input. Position `i` holds
/// the mean of the non-missing values in the clipped window
/// `[i - window/2, i + window/2]`, or NaN when that window contains no
/// measurement at all. An empty input yields an empty output.
///
/// Unlike a trailing moving average there is no lookback prefix: edge
/// positions average over however much of the window the series bounds
/// leave them.
///
/// # Arguments
///
/// * `values` - The input series; NaN marks a missing sample
/// * `window` - The centered window span (must be >= 1)
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if `window` is zero. This is the only
/// failure mode; missing samples, empty input, and windows larger than the
/// series are all well-defined.
///
/// # Performance
///
/// - Time complexity: O(n * window)
/// - Space complexity: O(n) for the output vector
///
/// # Example
///
/// ```
/// use burnin_series::smoothing::smooth;
///
/// let data = vec![10.0_f64, 20.0, 30.0];
/// let result = smooth(&data, 5).unwrap();
///
/// // Window exceeds the series, so every position sees all of it
/// for v in &result {
///     assert!((v - 20.0).abs() < 1e-10);
/// }
/// ```
pub fn smooth<T: SeriesElement>(values: &[T], window: usize) -> Result<Vec<T>> {
    let mut output = vec![T::nan(); values.len()];
    smooth_into(values, window, &mut output)?;
    Ok(output)
}

/// Computes the centered moving average into a pre-allocated output buffer.
///
/// This variant allows reusing an existing buffer to avoid allocations when
/// re-smoothing the same log under different window sizes.
///
/// Only the first `values.len()` elements of `output` are written; any tail
/// beyond that is left untouched.
///
/// # Arguments
///
/// * `values` - The input series; NaN marks a missing sample
/// * `window` - The centered window span (must be >= 1)
/// * `output` - Pre-allocated buffer (must be at least as long as the input)
///
/// # Errors
///
/// Returns an error if:
/// - The window is zero (`Error::InvalidWindow`)
/// - The output buffer is shorter than the input (`Error::BufferTooSmall`)
///
/// # Example
///
/// ```
/// use burnin_series::smoothing::smooth_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0_f64; 5];
/// smooth_into(&data, 3, &mut output).unwrap();
///
/// assert!((output[0] - 1.5).abs() < 1e-10); // mean of [1, 2]
/// assert!((output[2] - 3.0).abs() < 1e-10); // mean of [2, 3, 4]
/// ```
pub fn smooth_into<T: SeriesElement>(
    values: &[T],
    window: usize,
    output: &mut [T],
) -> Result<()> {
    validate_window(window)?;

    let n = values.len();
    if output.len() < n {
        return Err(Error::BufferTooSmall {
            required: n,
            actual: output.len(),
        });
    }

    let half = window / 2;

    for i in 0..n {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(n);

        let mut sum = T::zero();
        let mut count: usize = 0;
        for &v in &values[start..end] {
            if v.is_present() {
                sum = sum + v;
                count += 1;
            }
        }

        output[i] = if count == 0 {
            T::nan()
        } else {
            sum / T::from_usize(count)?
        };
    }

    Ok(())
}
