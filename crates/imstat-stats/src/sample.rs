//! Sample parsing
//!
//! A sample arrives as an ordered sequence of decimal-integer strings, one
//! per input line. Parsing keeps input order and records every line that
//! fails to convert in a [`ParseReport`], so callers can decide whether a
//! dirty sample is still worth summarizing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::order::{QuartileMethod, SortedValues};

/// What to do with a line that is not a valid decimal integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Substitute zero and keep the line in the count
    #[default]
    Zero,
    /// Drop the line from the sample
    Skip,
    /// Fail the whole parse on the first bad line
    Abort,
}

impl ParsePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParsePolicy::Zero => "zero",
            ParsePolicy::Skip => "skip",
            ParsePolicy::Abort => "abort",
        }
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(ParsePolicy::Zero),
            "skip" => Ok(ParsePolicy::Skip),
            "abort" => Ok(ParsePolicy::Abort),
            other => Err(format!("Unknown parse policy: {}", other)),
        }
    }
}

/// One line that failed integer conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    /// 1-based position in the sample
    pub line: usize,
    /// The offending text
    pub input: String,
    /// Why the conversion failed
    pub reason: String,
}

impl From<ParseDiagnostic> for StatsError {
    fn from(diag: ParseDiagnostic) -> Self {
        StatsError::Parse {
            line: diag.line,
            input: diag.input,
            reason: diag.reason,
        }
    }
}

/// Outcome of parsing a sample
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseReport {
    /// Policy applied to bad lines
    pub policy: ParsePolicy,
    /// Number of lines read
    pub lines_read: usize,
    /// Lines that failed to parse, in input order
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseReport {
    /// True when every line parsed
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of lines that failed to parse
    pub fn failures(&self) -> usize {
        self.diagnostics.len()
    }
}

/// A parsed sample: integer values in input order plus the parse report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    values: Vec<i64>,
    report: ParseReport,
}

impl Sample {
    /// Parse lines under the given policy
    ///
    /// Only [`ParsePolicy::Abort`] can fail; the other policies record bad
    /// lines in the report and carry on.
    pub fn parse<S: AsRef<str>>(lines: &[S], policy: ParsePolicy) -> Result<Self> {
        let mut values = Vec::with_capacity(lines.len());
        let mut diagnostics = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            match parse_line(idx + 1, line.as_ref()) {
                Ok(value) => values.push(value),
                Err(diag) => {
                    if policy == ParsePolicy::Abort {
                        return Err(diag.into());
                    }
                    tracing::warn!(
                        line = diag.line,
                        input = %diag.input,
                        reason = %diag.reason,
                        policy = %policy,
                        "cannot convert line to an integer"
                    );
                    if policy == ParsePolicy::Zero {
                        values.push(0);
                    }
                    diagnostics.push(diag);
                }
            }
        }

        Ok(Self {
            values,
            report: ParseReport {
                policy,
                lines_read: lines.len(),
                diagnostics,
            },
        })
    }

    /// Build a sample from already-parsed values
    pub fn from_values(values: Vec<i64>) -> Self {
        let report = ParseReport {
            lines_read: values.len(),
            ..Default::default()
        };
        Self { values, report }
    }

    /// Parsed values in input order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ascending copy of the values
    pub fn sorted(&self) -> SortedValues {
        SortedValues::from_values(&self.values)
    }

    pub fn mean(&self) -> f64 {
        crate::moments::mean_of(&self.values)
    }

    pub fn median(&self) -> Result<f64> {
        self.sorted().median()
    }

    pub fn range(&self) -> Result<i64> {
        self.sorted().range()
    }

    pub fn interquartile_range(&self, method: QuartileMethod) -> Result<i64> {
        self.sorted().interquartile_range(method)
    }

    pub fn min(&self) -> Result<i64> {
        self.sorted().min()
    }

    pub fn max(&self) -> Result<i64> {
        self.sorted().max()
    }

    pub fn variance(&self) -> f64 {
        crate::moments::variance_of(&self.values)
    }

    pub fn std_dev(&self) -> f64 {
        crate::moments::std_dev_of(&self.values)
    }
}

/// Parse with the zero-substitution policy, which never fails
pub(crate) fn parse_lenient<S: AsRef<str>>(lines: &[S]) -> Vec<i64> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(idx + 1, line.as_ref()).unwrap_or_else(|diag| {
                tracing::warn!(
                    line = diag.line,
                    input = %diag.input,
                    reason = %diag.reason,
                    "cannot convert line to an integer"
                );
                0
            })
        })
        .collect()
}

fn parse_line(line: usize, input: &str) -> std::result::Result<i64, ParseDiagnostic> {
    input.parse::<i64>().map_err(|e| ParseDiagnostic {
        line,
        input: input.to_string(),
        reason: e.to_string(),
    })
}
