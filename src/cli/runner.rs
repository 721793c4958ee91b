use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bitdiffer_runner::{BitDifferRunner, BitDifferSettings, ToolEnvironment};

use super::args::CliArgs;
use super::errors::AppError;

/// Verdict mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoChanges,
    /// Only returned with `--fail-on-changes`.
    Changes,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::NoChanges => 0,
            Outcome::Changes => 2,
        }
    }
}

fn init_logging(enabled: bool) {
    let default = if enabled { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Settings from `--settings` (or defaults) with command line flags applied on top.
pub fn merge_settings(args: &CliArgs) -> Result<BitDifferSettings, AppError> {
    let mut settings = match &args.settings {
        Some(path) => {
            BitDifferSettings::from_json_file(path).map_err(|source| AppError::Settings {
                path: path.clone(),
                source,
            })?
        }
        None => BitDifferSettings::default(),
    };

    if let Some(previous) = &args.previous {
        settings.previous_assembly_file = Some(previous.clone());
    }
    if let Some(current) = &args.current {
        settings.current_assembly_file = Some(current.clone());
    }
    if let Some(out) = &args.out {
        settings.result_output_file = Some(out.clone());
    }
    if let Some(all) = args.all {
        settings.report_only_changed = !all;
    }
    if let Some(public_only) = args.public_only {
        settings.compare_only_public = public_only;
    }
    if let Some(no_impl) = args.no_impl {
        settings.compare_implementation = !no_impl;
    }
    if let Some(attrs) = args.attrs {
        settings.compare_assembly_attribute_changes = attrs;
    }
    if let Some(level) = args.isolation {
        settings.isolation_level = level;
    }
    if let Some(gac_first) = args.gac_first {
        settings.prefer_gac_version = gac_first;
    }
    if let Some(execution) = args.execution {
        settings.reflection_only_loading = !execution;
    }
    if let Some(tool) = &args.tool_path {
        settings.tool_path = Some(tool.clone());
    }
    if let Some(launcher) = &args.launcher {
        settings.tool_launcher = Some(launcher.clone());
    }
    if let Some(dir) = &args.working_dir {
        settings.working_directory = Some(dir.clone());
    }

    Ok(settings)
}

pub fn run(args: CliArgs) -> Result<Outcome, AppError> {
    init_logging(args.log);
    run_with_writer(args, &mut std::io::stdout().lock())
}

/// Run one comparison and print the verdict to `out`.
pub fn run_with_writer<W: Write>(args: CliArgs, out: &mut W) -> Result<Outcome, AppError> {
    let settings = merge_settings(&args)?;
    let runner = BitDifferRunner::new(ToolEnvironment::from_process()?);
    let result = runner.run(Some(&settings))?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result.summary())?)?;
    } else if let Some(message) = result.change_message() {
        writeln!(out, "{}", message)?;
    }

    let changed = result.has_changes();
    info!("Comparison complete, changes detected: {}", changed);

    if changed && args.fail_on_changes {
        Ok(Outcome::Changes)
    } else {
        Ok(Outcome::NoChanges)
    }
}
