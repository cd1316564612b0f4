//! Error types for imstat-stats

use thiserror::Error;

/// Result type alias for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors raised by the statistics engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// An order statistic was requested on a sample with no values
    #[error("Sample is empty")]
    EmptySample,

    /// A line could not be parsed as a decimal integer
    #[error("Line {line}: cannot parse {input:?} as an integer: {reason}")]
    Parse {
        line: usize,
        input: String,
        reason: String,
    },

    /// Integer result does not fit in an i64
    #[error("Integer overflow computing {0}")]
    Overflow(&'static str),
}
