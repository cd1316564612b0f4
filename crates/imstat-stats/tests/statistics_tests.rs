//! Statistics integration tests
//!
//! Concrete cases for each operation plus property-based checks of the
//! relationships between them.

use imstat_stats::{
    interquartile_range, interquartile_range_with, max, mean, median, median_int, min, range,
    standard_deviation, variance, ParsePolicy, QuartileMethod, Sample, StatsError, Summary,
};
use proptest::prelude::*;
use rstest::rstest;

const TOLERANCE: f64 = 1e-9;

fn lines(values: &[i64]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// === Mean ===

#[rstest]
#[case(&["5"], 5.0)]
#[case(&["1", "2", "3", "4"], 2.5)]
#[case(&["1", "2", "3", "4", "5"], 3.0)]
#[case(&["-10", "10", "0"], 0.0)]
#[case(&["10", "20", "30", "40", "50"], 30.0)]
fn test_mean(#[case] input: &[&str], #[case] expected: f64) {
    assert!((mean(input) - expected).abs() < TOLERANCE);
}

// === Median ===

#[rstest]
#[case(&["1", "5", "2", "4", "3"], 3.0)]
#[case(&["1", "5", "2", "6", "3", "4"], 3.5)]
#[case(&["10", "20", "30", "40", "50"], 30.0)]
#[case(&["1", "2", "2", "3", "3", "3", "4"], 3.0)]
#[case(&["-10", "0", "10"], 0.0)]
#[case(&["-10", "0", "10", "20"], 5.0)]
fn test_median(#[case] input: &[&str], #[case] expected: f64) {
    assert!((median(input).unwrap() - expected).abs() < TOLERANCE);
}

#[rstest]
#[case(&[1, 5, 2, 4, 3], 3)]
#[case(&[1, 5, 2, 6, 3, 4], 3)]
#[case(&[1, 5, 2, 7, 3, 4], 3)]
#[case(&[10, 20, 30, 40, 50], 30)]
fn test_median_int(#[case] input: &[i64], #[case] expected: i64) {
    assert_eq!(median_int(input).unwrap(), expected);
}

// === Range, Min, Max ===

#[rstest]
#[case(&["1", "10", "5"], 9)]
#[case(&["5", "5", "5"], 0)]
#[case(&["-10", "0", "10"], 20)]
#[case(&["7"], 0)]
fn test_range(#[case] input: &[&str], #[case] expected: i64) {
    assert_eq!(range(input).unwrap(), expected);
}

#[rstest]
#[case(&["10", "1", "5"], 1, 10)]
#[case(&["-10", "0", "10"], -10, 10)]
#[case(&["7"], 7, 7)]
fn test_min_max(#[case] input: &[&str], #[case] lo: i64, #[case] hi: i64) {
    assert_eq!(min(input).unwrap(), lo);
    assert_eq!(max(input).unwrap(), hi);
}

// === Interquartile range ===

#[rstest]
#[case(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"], 5)]
#[case(&["1", "2", "3", "4", "5", "6", "7", "8", "9"], 5)]
#[case(&["1", "2", "3", "4"], 2)]
fn test_interquartile_range(#[case] input: &[&str], #[case] expected: i64) {
    assert_eq!(interquartile_range(input).unwrap(), expected);
}

#[test]
fn test_interquartile_range_unsorted_input() {
    let input = ["10", "3", "7", "1", "9", "2", "8", "4", "6", "5"];
    assert_eq!(interquartile_range(&input).unwrap(), 5);
}

#[test]
fn test_interquartile_range_even_counts_ignore_method() {
    let input = lines(&[4, 8, 15, 16, 23, 42]);
    assert_eq!(
        interquartile_range_with(&input, QuartileMethod::ExcludeMedian).unwrap(),
        interquartile_range_with(&input, QuartileMethod::IncludeMedian).unwrap()
    );
}

// === Variance and standard deviation ===

#[rstest]
#[case(&["2", "4", "4", "4", "5", "5", "7", "9"], 4.0, 2.0)]
#[case(&["5"], 0.0, 0.0)]
#[case(&["1", "5"], 4.0, 2.0)]
fn test_variance_and_std_dev(#[case] input: &[&str], #[case] var: f64, #[case] sd: f64) {
    assert!((variance(input) - var).abs() < TOLERANCE);
    assert!((standard_deviation(input) - sd).abs() < TOLERANCE);
}

// === Empty samples ===

#[test]
fn test_empty_sample() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(mean(&empty), 0.0);
    assert_eq!(variance(&empty), 0.0);
    assert_eq!(median(&empty), Err(StatsError::EmptySample));
    assert_eq!(range(&empty), Err(StatsError::EmptySample));
    assert_eq!(interquartile_range(&empty), Err(StatsError::EmptySample));
    assert_eq!(min(&empty), Err(StatsError::EmptySample));
    assert_eq!(max(&empty), Err(StatsError::EmptySample));
}

// === Parse handling ===

#[test]
fn test_bad_lines_behave_as_zero() {
    let input = ["5", "abc", "-5"];
    assert_eq!(min(&input).unwrap(), -5);
    assert!((median(&input).unwrap() - 0.0).abs() < TOLERANCE);
    assert!((mean(&input) - 0.0).abs() < TOLERANCE);
}

#[test]
fn test_sample_methods_agree_with_free_functions() {
    let input = ["12", "-3", "7", "7", "40", "1", "0"];
    let sample = Sample::parse(&input, ParsePolicy::Zero).unwrap();

    assert_eq!(sample.mean(), mean(&input));
    assert_eq!(sample.median(), median(&input));
    assert_eq!(sample.range(), range(&input));
    assert_eq!(
        sample.interquartile_range(QuartileMethod::ExcludeMedian),
        interquartile_range(&input)
    );
    assert_eq!(sample.min(), min(&input));
    assert_eq!(sample.max(), max(&input));
    assert_eq!(sample.variance(), variance(&input));
    assert_eq!(sample.std_dev(), standard_deviation(&input));
}

#[test]
fn test_summary_matches_individual_operations() {
    let input = ["2", "4", "4", "4", "5", "5", "7", "9"];
    let summary = Summary::from_lines(&input).unwrap();

    assert_eq!(summary.mean, mean(&input));
    assert_eq!(summary.median, median(&input).unwrap());
    assert_eq!(summary.range, i128::from(range(&input).unwrap()));
    assert_eq!(
        summary.interquartile_range,
        interquartile_range(&input).ok().map(i128::from)
    );
    assert_eq!(summary.min, min(&input).unwrap());
    assert_eq!(summary.max, max(&input).unwrap());
    assert_eq!(summary.variance, variance(&input));
    assert_eq!(summary.std_dev, standard_deviation(&input));
}

#[test]
fn test_idempotent() {
    let input = lines(&[9, -2, 14, 3, 3, 0, 21]);
    let before = input.clone();
    let first = Summary::from_lines(&input).unwrap();
    let second = Summary::from_lines(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(input, before);
}

// === Property-Based Tests ===

fn sample_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 1..200)
}

proptest! {
    #[test]
    fn test_variance_non_negative(values in sample_values()) {
        let input = lines(&values);
        let var = variance(&input);
        prop_assert!(var >= 0.0);
        prop_assert_eq!(standard_deviation(&input), var.sqrt());
    }

    #[test]
    fn test_median_and_mean_between_extremes(values in sample_values()) {
        let input = lines(&values);
        let lo = min(&input).unwrap() as f64;
        let hi = max(&input).unwrap() as f64;
        let med = median(&input).unwrap();
        let avg = mean(&input);
        prop_assert!(lo <= med && med <= hi);
        prop_assert!(lo - TOLERANCE <= avg && avg <= hi + TOLERANCE);
    }

    #[test]
    fn test_range_is_max_minus_min(values in sample_values()) {
        let input = lines(&values);
        prop_assert_eq!(range(&input).unwrap(), max(&input).unwrap() - min(&input).unwrap());
    }

    #[test]
    fn test_order_independent(values in sample_values()) {
        let forward = lines(&values);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(values.len() / 3);

        for permuted in [reversed, rotated] {
            prop_assert_eq!(median(&forward), median(&permuted));
            prop_assert_eq!(range(&forward), range(&permuted));
            prop_assert_eq!(interquartile_range(&forward), interquartile_range(&permuted));
            prop_assert_eq!(min(&forward), min(&permuted));
            prop_assert_eq!(max(&forward), max(&permuted));
            // Float sums may differ in the last bits with a different order
            prop_assert!((mean(&forward) - mean(&permuted)).abs() < 1e-6);
            let (a, b) = (variance(&forward), variance(&permuted));
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }

    #[test]
    fn test_median_int_within_half_of_real_median(values in sample_values()) {
        let input = lines(&values);
        let truncated = median_int(&values).unwrap() as f64;
        let real = median(&input).unwrap();
        prop_assert!((real - truncated).abs() <= 0.5);
    }
}
