//! Summary statistics for a sample
//!
//! Collects all eight statistics in one record:
//! - Mean, variance, standard deviation
//! - Min, max, range
//! - Median and interquartile range

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::moments::{mean_of, variance_of};
use crate::order::QuartileMethod;
use crate::sample::{ParseReport, Sample};

/// Summary statistics for an integer sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Mean (average)
    pub mean: f64,
    /// Median (middle pair averaged as a real number)
    pub median: f64,
    /// Max minus min, widened so any pair of i64 values fits
    pub range: i128,
    /// Q3 minus Q1, `None` when a quartile half is empty (a single value
    /// under [`QuartileMethod::ExcludeMedian`])
    pub interquartile_range: Option<i128>,
    /// Split used for the quartiles
    pub quartile_method: QuartileMethod,
    /// Minimum value
    pub min: i64,
    /// Maximum value
    pub max: i64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// How the input lines were parsed
    pub parse_report: ParseReport,
}

impl Summary {
    /// Compute every statistic from a parsed sample
    ///
    /// Sorts once and reads all order statistics from that sort.
    pub fn from_sample(sample: &Sample, quartile_method: QuartileMethod) -> Result<Self> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let sorted = sample.sorted();
        let variance = variance_of(sample.values());
        let interquartile_range = match sorted.wide_interquartile_range(quartile_method) {
            Ok(iqr) => Some(iqr),
            Err(StatsError::EmptySample) => None,
            Err(e) => return Err(e),
        };

        let summary = Self {
            count: sample.len(),
            mean: mean_of(sample.values()),
            median: sorted.median()?,
            range: sorted.wide_range()?,
            interquartile_range,
            quartile_method,
            min: sorted.min()?,
            max: sorted.max()?,
            variance,
            std_dev: variance.sqrt(),
            parse_report: sample.report().clone(),
        };

        tracing::debug!(
            count = summary.count,
            failures = summary.parse_report.failures(),
            "computed summary"
        );

        Ok(summary)
    }

    /// Parse lines with the default policy and summarize them
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let sample = Sample::parse(lines, Default::default())?;
        Self::from_sample(&sample, QuartileMethod::default())
    }
}
