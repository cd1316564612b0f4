//! Error types for the imstat CLI

use imstat_io::IoError;
use imstat_stats::StatsError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Anything that ends a run with a non-zero exit status
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("Error opening file: {0}")]
    Input(#[from] IoError),

    /// Statistics could not be computed
    #[error("{0}")]
    Stats(#[from] StatsError),

    /// Configuration is unusable
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the report failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
