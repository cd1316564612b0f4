//! imstat-cli - Command-line front end for imstat
//!
//! Reads a file of integers, summarizes it with `imstat-stats` and prints
//! the report. The binary in `main.rs` only wires up logging and the exit
//! status; everything else lives here so it can be tested.

pub mod args;
pub mod config;
pub mod error;
pub mod report;

use std::io::Write;

use imstat_stats::{Sample, Summary};
use tracing_subscriber::EnvFilter;

pub use args::CliArgs;
pub use config::{CliConfig, ConfigError, OutputConfig, OutputFormat, ParsingConfig};
pub use error::{CliError, Result};

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI, loading configuration from disk
///
/// Without a file argument only the usage line is printed.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    if args.file.is_none() {
        writeln!(out, "{}", CliArgs::usage())?;
        return Ok(());
    }
    let config = CliConfig::load(args.config.as_deref())?;
    run_with_config(args, config, out)
}

/// Run the CLI with an already-loaded configuration
pub fn run_with_config<W: Write>(
    args: &CliArgs,
    mut config: CliConfig,
    out: &mut W,
) -> Result<()> {
    let Some(path) = args.file.as_deref() else {
        writeln!(out, "{}", CliArgs::usage())?;
        return Ok(());
    };

    config.apply_args(args);
    config.validate()?;

    let lines = imstat_io::read_lines(path)?;
    let sample = Sample::parse(&lines, config.parsing.on_error)?;
    tracing::info!(
        path = %path.display(),
        values = sample.len(),
        failures = sample.report().failures(),
        "parsed sample"
    );

    if sample.is_empty() {
        tracing::warn!(path = %path.display(), "no values to summarize");
        match config.output.format {
            OutputFormat::Text => {
                out.write_all(report::render_empty_text(sample.report()).as_bytes())?
            }
            OutputFormat::Json => writeln!(out, "null")?,
        }
        return Ok(());
    }

    let summary = Summary::from_sample(&sample, config.parsing.quartiles)?;
    match config.output.format {
        OutputFormat::Text => {
            out.write_all(report::render_text(&summary, config.output.precision).as_bytes())?
        }
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&summary)?)?,
    }
    Ok(())
}
