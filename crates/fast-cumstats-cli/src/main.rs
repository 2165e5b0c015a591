//! fast-cumstats command-line interface
//!
//! Computes cumulative statistics over a column of a CSV file. Failures are
//! reported on stderr and exit with status 1.

use std::process::ExitCode;

use clap::Parser;
use fast_cumstats_cli::args::Args;
use fast_cumstats_cli::commands::run;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
