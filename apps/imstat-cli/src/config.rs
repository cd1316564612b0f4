//! Configuration for the imstat CLI
//!
//! Settings come from, in increasing priority: built-in defaults, the user
//! file `~/.imstat/config.toml` (or the file named by `--config`), and
//! command-line flags.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use imstat_stats::{ParsePolicy, QuartileMethod};
use serde::{Deserialize, Serialize};

use crate::args::CliArgs;

/// Largest number of decimal places shown for float statistics
pub const MAX_PRECISION: u32 = 15;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled lines
    #[default]
    Text,
    /// Pretty-printed JSON summary
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Report settings
    pub output: OutputConfig,
    /// Input handling
    pub parsing: ParsingConfig,
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for float statistics; unset rounds to whole numbers
    pub precision: Option<u32>,
}

/// Input handling configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// What to do with lines that are not integers
    pub on_error: ParsePolicy,
    /// Quartile split for the interquartile range
    pub quartiles: QuartileMethod,
}

impl CliConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the per-user config file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".imstat").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the user file is read if
    /// present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::user_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Override settings with any flags given on the command line
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(precision) = args.precision {
            self.output.precision = Some(precision);
        }
        if let Some(policy) = args.on_parse_error {
            self.parsing.on_error = policy;
        }
        if let Some(method) = args.quartiles {
            self.parsing.quartiles = method;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(precision) = self.output.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::OutOfRange(format!(
                    "precision must be at most {}, got {}",
                    MAX_PRECISION, precision
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read
    Io(String),
    /// Config file is not valid TOML for this schema
    Parse(String),
    /// Value is out of valid range
    OutOfRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Cannot read config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::OutOfRange(msg) => write!(f, "Value out of range: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
