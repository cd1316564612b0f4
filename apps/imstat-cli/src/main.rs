//! imstat binary
//!
//! `imstat <FILE>` prints descriptive statistics for a file holding one
//! integer per line.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use imstat_cli::{init_tracing, run, CliArgs};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_level());

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
