//! Command Line Interface (CLI) layer for bitdiffer-runner.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges a settings file with
//! flags, runs one comparison and reports the verdict.
//!
//! If you are embedding the runner into build tooling, prefer the
//! `bitdiffer_runner::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{Outcome, run};
