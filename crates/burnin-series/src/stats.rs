//! NaN-omitting summary statistics for burn-in series.
//!
//! Burn-in logs are analyzed per error direction after sign masking, so the
//! series handed to this module routinely contain missing markers at most
//! positions. Every statistic here omits missing samples rather than
//! propagating them, and reports [`Error::NoValidSamples`] when the input
//! holds no measurement at all.
//!
//! # Mathematical Conventions
//!
//! - **Population formulas**: variance and the higher moments use ÷n,
//!   not ÷(n-1)
//! - **Percentiles**: linear interpolation between closest ranks
//! - **Kurtosis**: excess kurtosis (normal distribution scores 0)

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Relabels a `NoValidSamples` error with the outer operation's name,
/// leaving other error kinds untouched.
fn relabel(err: Error, context: &'static str) -> Error {
    match err {
        Error::NoValidSamples { .. } => Error::NoValidSamples { context },
        other => other,
    }
}

// =============================================================================
// Basic moments
// =============================================================================

/// Computes the arithmetic mean of the non-missing samples.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn nan_mean<T: SeriesElement>(data: &[T]) -> Result<T> {
    let mut sum = T::zero();
    let mut count: usize = 0;
    for &v in data {
        if v.is_present() {
            sum = sum + v;
            count += 1;
        }
    }
    if count == 0 {
        return Err(Error::NoValidSamples { context: "mean" });
    }
    Ok(sum / T::from_usize(count)?)
}

/// Computes the population variance (÷n) of the non-missing samples.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn nan_variance<T: SeriesElement>(data: &[T]) -> Result<T> {
    let mean = nan_mean(data).map_err(|e| relabel(e, "variance"))?;

    let mut sum = T::zero();
    let mut count: usize = 0;
    for &v in data {
        if v.is_present() {
            let diff = v - mean;
            sum = sum + diff * diff;
            count += 1;
        }
    }
    Ok(sum / T::from_usize(count)?)
}

/// Computes the population standard deviation of the non-missing samples.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn nan_std<T: SeriesElement>(data: &[T]) -> Result<T> {
    Ok(nan_variance(data).map_err(|e| relabel(e, "std"))?.sqrt())
}

/// Computes the median of the non-missing samples.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn nan_median<T: SeriesElement>(data: &[T]) -> Result<T> {
    nan_percentile(data, 50.0).map_err(|e| relabel(e, "median"))
}

/// Computes the `q`-th percentile of the non-missing samples.
///
/// Uses linear interpolation between closest ranks: for `m` sorted samples
/// the rank is `q / 100 * (m - 1)`, and fractional ranks interpolate between
/// the two neighboring samples.
///
/// # Errors
///
/// Returns an error if:
/// - `q` is outside `[0, 100]` or NaN (`Error::InvalidPercentile`)
/// - No non-missing sample exists (`Error::NoValidSamples`)
pub fn nan_percentile<T: SeriesElement>(data: &[T], q: f64) -> Result<T> {
    if !(0.0..=100.0).contains(&q) {
        return Err(Error::InvalidPercentile { q });
    }

    let mut present: Vec<T> = data.iter().copied().filter(|v| v.is_present()).collect();
    if present.is_empty() {
        return Err(Error::NoValidSamples {
            context: "percentile",
        });
    }
    // No NaN remains, so the ordering is total
    present.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let rank = q / 100.0 * (present.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Ok(present[lo]);
    }

    let frac = T::from_f64(rank - lo as f64)?;
    Ok(present[lo] + (present[hi] - present[lo]) * frac)
}

// =============================================================================
// Shape statistics
// =============================================================================

/// Computes the skewness of the non-missing samples.
///
/// Uses the biased population estimator `g1 = m3 / m2^(3/2)`. A series with
/// zero variance has no defined skewness and yields NaN.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn skewness<T: SeriesElement>(data: &[T]) -> Result<T> {
    let (m2, m3, _) = central_moments(data, "skewness")?;
    Ok(m3 / m2.powf(T::from_f64(1.5)?))
}

/// Computes the excess kurtosis of the non-missing samples.
///
/// Uses the biased population estimator `g2 = m4 / m2^2 - 3`, so a normal
/// distribution scores 0. A series with zero variance has no defined
/// kurtosis and yields NaN.
///
/// # Errors
///
/// Returns `Error::NoValidSamples` if no non-missing sample exists.
pub fn kurtosis<T: SeriesElement>(data: &[T]) -> Result<T> {
    let (m2, _, m4) = central_moments(data, "kurtosis")?;
    let three = T::from_usize(3)?;
    Ok(m4 / (m2 * m2) - three)
}

/// Second, third, and fourth central moments over the non-missing samples.
fn central_moments<T: SeriesElement>(data: &[T], context: &'static str) -> Result<(T, T, T)> {
    let mean = nan_mean(data).map_err(|e| relabel(e, context))?;

    let mut m2 = T::zero();
    let mut m3 = T::zero();
    let mut m4 = T::zero();
    let mut count: usize = 0;
    for &v in data {
        if v.is_present() {
            let d = v - mean;
            let d2 = d * d;
            m2 = m2 + d2;
            m3 = m3 + d2 * d;
            m4 = m4 + d2 * d2;
            count += 1;
        }
    }
    let count_t = T::from_usize(count)?;
    Ok((m2 / count_t, m3 / count_t, m4 / count_t))
}

// =============================================================================
// Peak counting
// =============================================================================

/// Counts the strict local maxima whose value is at least `height`.
///
/// A sample is a peak when it is present and strictly greater than both of
/// its immediate neighbors; the first and last samples are never peaks, and
/// a missing neighbor disqualifies a candidate. Plateaus (equal adjacent
/// samples) are not grouped into a single peak.
///
/// To count drops below a negative threshold, negate the series and pass
/// the threshold magnitude, as [`SummaryStats::from_values`] does for its
/// drop count.
#[must_use]
pub fn count_peaks<T: SeriesElement>(data: &[T], height: T) -> usize {
    if data.len() < 3 {
        return 0;
    }
    let mut count = 0;
    for i in 1..data.len() - 1 {
        let v = data[i];
        // Comparisons against NaN are false, so missing candidates and
        // missing neighbors both fall through
        if v >= height && v > data[i - 1] && v > data[i + 1] {
            count += 1;
        }
    }
    count
}

// =============================================================================
// Summary report
// =============================================================================

/// The per-direction summary a burn-in report is built from.
///
/// Extremes and quartiles are taken over absolute error magnitudes; the
/// moments are taken over the signed samples. Threshold percentages compare
/// magnitudes strictly against the threshold, so samples exactly at the
/// threshold count toward neither side.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats<T> {
    /// Mean of the signed samples.
    pub mean: T,
    /// Median of the signed samples.
    pub median: T,
    /// Smallest absolute sample magnitude.
    pub min_abs: T,
    /// Largest absolute sample magnitude.
    pub max_abs: T,
    /// Population standard deviation of the signed samples.
    pub std: T,
    /// Population variance of the signed samples.
    pub variance: T,
    /// 25th percentile of absolute magnitudes.
    pub q25_abs: T,
    /// 75th percentile of absolute magnitudes.
    pub q75_abs: T,
    /// Skewness of the signed samples.
    pub skewness: T,
    /// Excess kurtosis of the signed samples.
    pub kurtosis: T,
    /// Percentage of samples with magnitude strictly above the threshold.
    pub pct_above_threshold: T,
    /// Percentage of samples with magnitude strictly below the threshold.
    pub pct_below_threshold: T,
    /// Number of peaks reaching the threshold in the positive direction.
    pub peaks_above: usize,
    /// Number of drops reaching the threshold in the negative direction.
    pub drops_below: usize,
    /// Number of non-missing samples the statistics are based on.
    pub valid_count: usize,
}

impl<T: SeriesElement> SummaryStats<T> {
    /// Computes the full summary over a series, omitting missing samples.
    ///
    /// `threshold` is the error magnitude the exceedance percentages and
    /// peak counts are measured against.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoValidSamples` if the series holds no measurement.
    pub fn from_values(values: &[T], threshold: T) -> Result<Self> {
        let valid_count = values.iter().filter(|v| v.is_present()).count();
        if valid_count == 0 {
            return Err(Error::NoValidSamples {
                context: "summary statistics",
            });
        }

        let abs: Vec<T> = values.iter().map(|v| v.abs()).collect();
        let negated: Vec<T> = values.iter().map(|&v| -v).collect();

        let min_abs = abs
            .iter()
            .copied()
            .filter(|v| v.is_present())
            .fold(T::infinity(), T::min);
        let max_abs = abs
            .iter()
            .copied()
            .filter(|v| v.is_present())
            .fold(T::zero(), T::max);

        let above = abs.iter().filter(|&&v| v > threshold).count();
        let below = abs.iter().filter(|&&v| v < threshold).count();
        let valid_t = T::from_usize(valid_count)?;
        let pct_above_threshold = T::from_usize(above)? / valid_t * T::hundred();
        let pct_below_threshold = T::from_usize(below)? / valid_t * T::hundred();

        Ok(Self {
            mean: nan_mean(values)?,
            median: nan_median(values)?,
            min_abs,
            max_abs,
            std: nan_std(values)?,
            variance: nan_variance(values)?,
            q25_abs: nan_percentile(&abs, 25.0)?,
            q75_abs: nan_percentile(&abs, 75.0)?,
            skewness: skewness(values)?,
            kurtosis: kurtosis(values)?,
            pct_above_threshold,
            pct_below_threshold,
            peaks_above: count_peaks(values, threshold),
            drops_below: count_peaks(&negated, threshold),
            valid_count,
        })
    }
}
