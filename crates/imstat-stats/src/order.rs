//! Order statistics
//!
//! Median, quartiles, min, max and range all read positions in an
//! ascending sort. [`SortedValues`] owns one such sort so a full summary
//! sorts the sample once.
//!
//! Two medians live here on purpose:
//! - [`SortedValues::median`] averages the middle pair as a real number
//! - [`median_int`] averages it with truncating integer division, which is
//!   what the quartile boundaries use

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::sample::parse_lenient;

/// How the sorted sample is split into halves for the quartiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum QuartileMethod {
    /// For odd counts the middle value belongs to neither half
    #[default]
    #[cfg_attr(feature = "clap", value(alias = "exclude"))]
    ExcludeMedian,
    /// For odd counts the middle value belongs to both halves
    #[cfg_attr(feature = "clap", value(alias = "include"))]
    IncludeMedian,
}

impl QuartileMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuartileMethod::ExcludeMedian => "exclude-median",
            QuartileMethod::IncludeMedian => "include-median",
        }
    }
}

impl fmt::Display for QuartileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuartileMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exclude-median" | "exclude" => Ok(QuartileMethod::ExcludeMedian),
            "include-median" | "include" => Ok(QuartileMethod::IncludeMedian),
            other => Err(format!("Unknown quartile method: {}", other)),
        }
    }
}

/// Values in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedValues {
    values: Vec<i64>,
}

impl SortedValues {
    /// Sort a copy of the values
    ///
    /// Time complexity: O(n log n)
    pub fn from_values(values: &[i64]) -> Self {
        let mut values = values.to_vec();
        values.sort_unstable();
        Self { values }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Result<i64> {
        self.values.first().copied().ok_or(StatsError::EmptySample)
    }

    pub fn max(&self) -> Result<i64> {
        self.values.last().copied().ok_or(StatsError::EmptySample)
    }

    /// Max minus min
    pub fn range(&self) -> Result<i64> {
        i64::try_from(self.wide_range()?).map_err(|_| StatsError::Overflow("range"))
    }

    /// Max minus min without the i64 limit
    pub fn wide_range(&self) -> Result<i128> {
        let (min, max) = (self.min()?, self.max()?);
        Ok(max as i128 - min as i128)
    }

    /// Median with the middle pair averaged as a real number
    pub fn median(&self) -> Result<f64> {
        let n = self.values.len();
        if n == 0 {
            return Err(StatsError::EmptySample);
        }
        if n % 2 == 0 {
            let first = self.values[n / 2 - 1] as f64;
            let second = self.values[n / 2] as f64;
            Ok((first + second) / 2.0)
        } else {
            Ok(self.values[n / 2] as f64)
        }
    }

    /// Lower and upper halves used for Q1 and Q3
    ///
    /// `half = n / 2`. Even counts split at `half`. Odd counts either drop
    /// the middle value or give it to both halves, depending on `method`.
    pub fn halves(&self, method: QuartileMethod) -> (&[i64], &[i64]) {
        let n = self.values.len();
        let half = n / 2;
        if n % 2 == 0 {
            (&self.values[..half], &self.values[half..])
        } else {
            match method {
                QuartileMethod::ExcludeMedian => (&self.values[..half], &self.values[half + 1..]),
                QuartileMethod::IncludeMedian => (&self.values[..half + 1], &self.values[half..]),
            }
        }
    }

    /// First and third quartiles
    pub fn quartiles(&self, method: QuartileMethod) -> Result<(i64, i64)> {
        if self.values.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let (lower, upper) = self.halves(method);
        Ok((median_int_sorted(lower)?, median_int_sorted(upper)?))
    }

    /// Q3 minus Q1
    pub fn interquartile_range(&self, method: QuartileMethod) -> Result<i64> {
        i64::try_from(self.wide_interquartile_range(method)?)
            .map_err(|_| StatsError::Overflow("interquartile range"))
    }

    /// Q3 minus Q1 without the i64 limit
    pub fn wide_interquartile_range(&self, method: QuartileMethod) -> Result<i128> {
        let (q1, q3) = self.quartiles(method)?;
        Ok(q3 as i128 - q1 as i128)
    }
}

/// Median of already-parsed values, middle pair combined with truncating
/// integer division (3 and 4 give 3)
///
/// The caller's slice is left untouched.
pub fn median_int(values: &[i64]) -> Result<i64> {
    let sorted = SortedValues::from_values(values);
    median_int_sorted(sorted.as_slice())
}

fn median_int_sorted(sorted: &[i64]) -> Result<i64> {
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::EmptySample);
    }
    if n % 2 == 0 {
        // i128 sum cannot overflow; the quotient lies between the operands
        let sum = sorted[n / 2 - 1] as i128 + sorted[n / 2] as i128;
        Ok((sum / 2) as i64)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Median of a sample, middle pair averaged as a real number
pub fn median<S: AsRef<str>>(sample: &[S]) -> Result<f64> {
    sorted_sample(sample).median()
}

/// Max minus min of a sample
pub fn range<S: AsRef<str>>(sample: &[S]) -> Result<i64> {
    sorted_sample(sample).range()
}

/// Interquartile range with the middle value excluded for odd counts
pub fn interquartile_range<S: AsRef<str>>(sample: &[S]) -> Result<i64> {
    interquartile_range_with(sample, QuartileMethod::ExcludeMedian)
}

/// Interquartile range with an explicit split method
pub fn interquartile_range_with<S: AsRef<str>>(
    sample: &[S],
    method: QuartileMethod,
) -> Result<i64> {
    sorted_sample(sample).interquartile_range(method)
}

/// Smallest value of a sample
pub fn min<S: AsRef<str>>(sample: &[S]) -> Result<i64> {
    sorted_sample(sample).min()
}

/// Largest value of a sample
pub fn max<S: AsRef<str>>(sample: &[S]) -> Result<i64> {
    sorted_sample(sample).max()
}

fn sorted_sample<S: AsRef<str>>(sample: &[S]) -> SortedValues {
    SortedValues::from_values(&parse_lenient(sample))
}
