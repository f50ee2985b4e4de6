//! # Peribolos Config Builder CLI
//!
//! This is the binary entry point for the `peribolos-builder` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Running the build and reporting a failure as a single error line with
//!   a non-zero exit status.
//!
//! The merge logic is defined in the `lib.rs` library crate, so the binary
//! stays a thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::error;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    cli.init_logging();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Failed to build org config: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
