use clap::Parser;
use std::path::PathBuf;

use bitdiffer_runner::IsolationLevel;

/// Comparison switches take an optional `=true`/`=false`, so a bare `--all`
/// turns it on and `--all=false` reverts a value from the settings file.
#[derive(Parser, Debug)]
#[command(name = "bitdiffer-runner", version, about = "Compare two assembly versions with BitDiffer.Console")]
pub struct CliArgs {
    /// Previous version of the assembly
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// Current version of the assembly
    #[arg(short, long)]
    pub current: Option<PathBuf>,

    /// JSON settings file; flags given on the command line override its values
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Human-facing result file (HTML or XML)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Report all assemblies, not only changed ones
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub all: Option<bool>,

    /// Compare only public members
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub public_only: Option<bool>,

    /// Skip comparing method and property implementations
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_impl: Option<bool>,

    /// Compare assembly attribute values
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub attrs: Option<bool>,

    /// AppDomain isolation level (auto, low, medium, high)
    #[arg(long, value_enum)]
    pub isolation: Option<IsolationLevel>,

    /// Prefer dependent assemblies from the GAC
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub gac_first: Option<bool>,

    /// Load assemblies for execution instead of reflection only
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub execution: Option<bool>,

    /// Path to BitDiffer.Console.exe (skips lookup)
    #[arg(long)]
    pub tool_path: Option<PathBuf>,

    /// Program that runs the tool, e.g. mono
    #[arg(long)]
    pub launcher: Option<PathBuf>,

    /// Working directory for relative paths and the tool process
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Print a JSON summary instead of the message
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Exit with status 2 when changes are detected
    #[arg(long, default_value_t = false)]
    pub fail_on_changes: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
