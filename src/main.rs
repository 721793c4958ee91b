//! bitdiffer-runner CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run one
//! comparison, and exit with a status reflecting the verdict.
//! For programmatic use, prefer the library API (`bitdiffer_runner::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
