//! Mean and dispersion
//!
//! Variance here is the population variance: squared deviations from the
//! mean divided by `n`, not `n - 1`. An empty sample has mean and variance 0.

use crate::sample::parse_lenient;

/// Arithmetic mean of parsed values
pub fn mean_of(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    // i128 accumulator so long samples of large values cannot wrap
    let sum: i128 = values.iter().map(|&x| x as i128).sum();
    sum as f64 / values.len() as f64
}

/// Population variance of parsed values
pub fn variance_of(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean_of(values);
    let total: f64 = values.iter().map(|&x| (mean - x as f64).powi(2)).sum();
    total / values.len() as f64
}

/// Population standard deviation of parsed values
pub fn std_dev_of(values: &[i64]) -> f64 {
    variance_of(values).sqrt()
}

/// Mean of a sample
pub fn mean<S: AsRef<str>>(sample: &[S]) -> f64 {
    mean_of(&parse_lenient(sample))
}

/// Population variance of a sample
pub fn variance<S: AsRef<str>>(sample: &[S]) -> f64 {
    variance_of(&parse_lenient(sample))
}

/// Population standard deviation of a sample
pub fn standard_deviation<S: AsRef<str>>(sample: &[S]) -> f64 {
    std_dev_of(&parse_lenient(sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&["1", "2", "3", "4"]) - 2.5).abs() < 1e-10);
        assert!((mean(&["-10", "10", "0"]) - 0.0).abs() < 1e-10);
        assert!((mean(&["10", "20", "30", "40", "50"]) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_sample_is_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(mean(&empty), 0.0);
        assert_eq!(variance(&empty), 0.0);
        assert_eq!(standard_deviation(&empty), 0.0);
    }

    #[test]
    fn test_variance_population() {
        let data = ["2", "4", "4", "4", "5", "5", "7", "9"];
        assert!((variance(&data) - 4.0).abs() < 1e-10);
        assert!((standard_deviation(&data) - 2.0).abs() < 1e-10);
        // n, not n - 1
        assert!((variance(&["1", "5"]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_value_has_no_spread() {
        assert_eq!(variance(&["5"]), 0.0);
        assert_eq!(standard_deviation(&["5"]), 0.0);
    }

    #[test]
    fn test_bad_line_counts_as_zero() {
        // Mean of 4, 0, 8
        assert!((mean(&["4", "oops", "8"]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_large_values() {
        let values = [i64::MAX, i64::MAX];
        assert!((mean_of(&values) - i64::MAX as f64).abs() < 1.0e4);
    }
}
