//! Integration tests for the public API.
//!
//! These tests validate the ergonomics of the burnin-series public API,
//! ensuring that typical usage patterns work correctly end to end.

#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

use burnin_series::prelude::*;

// A short burn-in error log: signed error counts against a 40-count
// threshold, with a couple of dropped readings.
fn sample_errors() -> Vec<f64> {
    vec![
        12.0, -8.0, 45.0, f64::NAN, -52.0, 3.0, 18.0, -41.0, f64::NAN, 7.0, 60.0, -2.0,
    ]
}

fn sample_log() -> TimeSeries<f64> {
    let errors = sample_errors();
    let time: Vec<f64> = (0..errors.len()).map(|i| i as f64 * 0.5).collect();
    TimeSeries::new("axis A error", time, errors).unwrap()
}

// ==================== Basic Usage Tests ====================

#[test]
fn test_prelude_import_basic() {
    // Verify that `use burnin_series::prelude::*` provides all needed items
    let errors = sample_errors();

    let _smoothed = smooth(&errors, 5).unwrap();
    let _mean = nan_mean(&errors).unwrap();
    let _report = SummaryStats::from_values(&errors, 40.0).unwrap();
}

#[test]
fn test_smooth_preserves_length_and_gaps() {
    let errors = sample_errors();
    let result = smooth(&errors, 3).unwrap();

    assert_eq!(result.len(), errors.len());
    // Window 3 around every position of this log holds at least one
    // measurement, so no gap survives smoothing
    assert_eq!(count_missing(&result), 0);
}

#[test]
fn test_smooth_into_matches_smooth() {
    let errors = sample_errors();
    let by_alloc = smooth(&errors, 5).unwrap();

    let mut by_buffer = vec![0.0_f64; errors.len()];
    smooth_into(&errors, 5, &mut by_buffer).unwrap();

    for (a, b) in by_alloc.iter().zip(by_buffer.iter()) {
        assert!(approx_eq(*a, *b, EPSILON));
    }
}

// ==================== Gap Scenario Tests ====================

#[test]
fn test_gapped_series_scenario() {
    let values = vec![1.0_f64, f64::NAN, 3.0, f64::NAN, 5.0];
    let result = smooth(&values, 3).unwrap();

    let expected = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(result.len(), expected.len());
    for (r, e) in result.iter().zip(expected.iter()) {
        assert!(approx_eq(*r, *e, EPSILON));
    }
}

#[test]
fn test_all_missing_scenario() {
    let values = vec![f64::NAN, f64::NAN];
    let result = smooth(&values, 1).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result[0].is_nan());
    assert!(result[1].is_nan());
}

#[test]
fn test_empty_input_scenario() {
    for window in [1, 3, 1000] {
        let result = smooth(&[] as &[f64], window).unwrap();
        assert!(result.is_empty());
    }
}

#[test]
fn test_zero_window_rejected() {
    let values = vec![1.0_f64, 2.0, 3.0];
    assert!(matches!(
        smooth(&values, 0),
        Err(Error::InvalidWindow { window: 0, .. })
    ));
}

// ==================== Pipeline Tests ====================

#[test]
fn test_per_direction_pipeline() {
    // The full analysis flow: split by direction, smooth each for display,
    // and summarize each against the threshold.
    let log = sample_log();

    let positive = log.positive();
    let negative = log.negative();

    let smoothed_pos = positive.smoothed(5).unwrap();
    let smoothed_neg = negative.smoothed(5).unwrap();

    assert_eq!(smoothed_pos.len(), log.len());
    assert_eq!(smoothed_neg.len(), log.len());
    assert_eq!(smoothed_pos.time(), log.time());

    // Smoothed positive values stay non-negative: they are means of
    // positive samples only
    for &v in smoothed_pos.values() {
        assert!(v.is_nan() || v > 0.0);
    }
    for &v in smoothed_neg.values() {
        assert!(v.is_nan() || v < 0.0);
    }

    let pos_report = SummaryStats::from_values(positive.values(), 40.0).unwrap();
    let neg_report = SummaryStats::from_values(negative.values(), 40.0).unwrap();

    // Positive samples: {12, 45, 3, 18, 7, 60}; negative: {-8, -52, -41, -2}
    assert_eq!(pos_report.valid_count, 6);
    assert_eq!(neg_report.valid_count, 4);
    assert!(pos_report.mean > 0.0);
    assert!(neg_report.mean < 0.0);
}

#[test]
fn test_summary_stats_on_raw_log() {
    let errors = sample_errors();
    let report = SummaryStats::from_values(&errors, 40.0).unwrap();

    assert_eq!(report.valid_count, 10);
    assert!(approx_eq(report.max_abs, 60.0, EPSILON));
    assert!(approx_eq(report.min_abs, 2.0, EPSILON));
    // |errors| above 40: {45, 52, 41, 60} of 10 valid samples
    assert!(approx_eq(report.pct_above_threshold, 40.0, EPSILON));
    assert!(approx_eq(report.pct_below_threshold, 60.0, EPSILON));
}

#[test]
fn test_rewindowed_smoothing_reuses_buffer() {
    // Re-smoothing the same log under several window sizes, as an operator
    // adjusting the display control would
    let errors = sample_errors();
    let mut buffer = vec![0.0_f64; errors.len()];

    for window in [1, 3, 9, 17, 10_000] {
        smooth_into(&errors, window, &mut buffer).unwrap();
        assert_eq!(buffer.len(), errors.len());
    }

    // The widest window reduces every position to the overall mean
    let overall = nan_mean(&errors).unwrap();
    for &v in &buffer {
        assert!(approx_eq(v, overall, EPSILON));
    }
}

// ==================== Error Propagation Tests ====================

#[test]
fn test_errors_are_reportable() {
    // Errors format into operator-facing messages
    let err = smooth(&[1.0_f64], 0).unwrap_err();
    assert!(err.to_string().contains("invalid window"));

    let err = TimeSeries::new("bad", vec![0.0_f64], vec![]).unwrap_err();
    assert!(err.to_string().contains("length mismatch"));

    let err = nan_mean(&[] as &[f64]).unwrap_err();
    assert!(err.to_string().contains("no valid samples"));
}

#[test]
fn test_question_mark_propagation() {
    fn analyze(values: &[f64], window: usize) -> Result<(Vec<f64>, f64)> {
        let smoothed = smooth(values, window)?;
        let mean = nan_mean(&smoothed)?;
        Ok((smoothed, mean))
    }

    let errors = sample_errors();
    let (smoothed, mean) = analyze(&errors, 3).unwrap();
    assert_eq!(smoothed.len(), errors.len());
    assert!(mean.is_finite());

    assert!(analyze(&errors, 0).is_err());
}
