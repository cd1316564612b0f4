//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use imstat_stats::{ParsePolicy, QuartileMethod};

use crate::config::OutputFormat;

#[derive(Parser, Debug, Default)]
#[command(
    name = "imstat",
    version,
    about = "Descriptive statistics for a file of integers, one per line"
)]
pub struct CliArgs {
    /// File with one decimal integer per line
    pub file: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for mean, median, variance and standard deviation
    #[arg(short, long)]
    pub precision: Option<u32>,

    /// Handling of non-integer lines
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_parse_error: Option<ParsePolicy>,

    /// Quartile split for odd-sized samples
    #[arg(long, value_enum, value_name = "METHOD")]
    pub quartiles: Option<QuartileMethod>,

    /// Config file to use instead of ~/.imstat/config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// One-line usage message
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
