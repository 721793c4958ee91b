//! High-level library API: run the BitDiffer console against two assembly versions
//! and get back a [`BitDifferResult`]. Prefer these entrypoints over assembling
//! arguments and parsing reports by hand.
use std::fs;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::core::args::{ValidatedSettings, build_arguments};
use crate::core::paths::resolve_on_host;
use crate::core::result::BitDifferResult;
use crate::core::settings::{BitDifferSettings, ToolEnvironment};
use crate::error::{Error, Result};
use crate::io::log::ToolLog;
use crate::io::report::RawReport;
use crate::io::tool::{TOOL_NAME, ToolLocator};

/// Runs one comparison per call, synchronously.
#[derive(Debug, Clone)]
pub struct BitDifferRunner {
    env: ToolEnvironment,
    locator: ToolLocator,
}

impl BitDifferRunner {
    pub fn new(env: ToolEnvironment) -> Self {
        Self {
            env,
            locator: ToolLocator::from_process_env(),
        }
    }

    pub fn with_locator(mut self, locator: ToolLocator) -> Self {
        self.locator = locator;
        self
    }

    pub fn environment(&self) -> &ToolEnvironment {
        &self.env
    }

    /// Validate `settings`, run the console to completion and interpret its output.
    ///
    /// A non-zero exit code is recorded on the result, not raised, and a raw
    /// report that is missing or empty is treated as absent. The raw report is
    /// written to a fresh temporary file that is removed on every exit path;
    /// default reports announced on stdout are removed before the raw report
    /// is parsed.
    pub fn run(&self, settings: Option<&BitDifferSettings>) -> Result<BitDifferResult> {
        let settings = settings.ok_or(Error::MissingSettings { param: "settings" })?;
        let env = self.env.clone().with_settings(settings);
        let validated = ValidatedSettings::validate(Some(settings), &env)?;
        let tool = self.locator.locate(settings, &env)?;

        let raw_report = tempfile::Builder::new()
            .prefix("bitdiffer-raw-")
            .suffix(".xml")
            .tempfile()?
            .into_temp_path();

        let args = build_arguments(&validated, &raw_report, &env);
        info!(
            "Comparing {:?} -> {:?}",
            validated.previous_assembly_file(),
            validated.current_assembly_file()
        );
        debug!("{} {}", tool.program.display(), args);

        let output = Command::new(&tool.program)
            .args(&tool.leading_args)
            .args(args.as_os_args())
            .current_dir(&env.working_directory)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Launch {
                program: tool.program.clone(),
                source,
            })?;

        let log = ToolLog::from_stdout(&output.stdout);
        if !output.stderr.is_empty() {
            debug!("{} stderr: {}", TOOL_NAME, String::from_utf8_lossy(&output.stderr));
        }
        if !output.status.success() {
            warn!("{} exited with {}", TOOL_NAME, output.status);
        }

        if settings.result_output_file.is_none() {
            remove_default_reports(&log, &env);
        }

        let raw = match fs::read_to_string(&raw_report) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let report = if raw.trim_start_matches('\u{feff}').trim().is_empty() {
            warn!("{} produced no raw report", TOOL_NAME);
            None
        } else {
            Some(RawReport::parse_str(&raw)?)
        };

        match raw_report.close() {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                warn!("Could not remove raw report: {}", e)
            }
            _ => {}
        }

        Ok(BitDifferResult {
            raw_report: report,
            output: log,
            exit_code: output.status.code(),
        })
    }
}

/// Delete the human-facing reports the console wrote on its own.
fn remove_default_reports(log: &ToolLog, env: &ToolEnvironment) {
    for path in log.written_reports() {
        let path = resolve_on_host(&path, env);
        if path.is_file() {
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed default report {:?}", path),
                Err(e) => warn!("Could not remove default report {:?}: {}", path, e),
            }
        }
    }
}

/// Compare with `settings` in the current process environment.
pub fn compare_assemblies(settings: &BitDifferSettings) -> Result<BitDifferResult> {
    BitDifferRunner::new(ToolEnvironment::from_process()?).run(Some(settings))
}

/// Compare with default settings adjusted by `configure`.
///
/// ```rust,no_run
/// let result = bitdiffer_runner::compare_assemblies_with(|s| {
///     s.previous_assembly_file = Some("./Version1/MyAssembly.dll".into());
///     s.current_assembly_file = Some("./Version2/MyAssembly.dll".into());
/// })?;
/// if result.has_changes() {
///     eprintln!("{}", result.change_message().unwrap_or_default());
/// }
/// # Ok::<(), bitdiffer_runner::Error>(())
/// ```
pub fn compare_assemblies_with<F>(configure: F) -> Result<BitDifferResult>
where
    F: FnOnce(&mut BitDifferSettings),
{
    let mut settings = BitDifferSettings::default();
    configure(&mut settings);
    compare_assemblies(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlatformFamily;
    use tempfile::TempDir;

    #[test]
    fn missing_settings_fail_before_lookup() {
        let dir = TempDir::new().unwrap();
        let runner = BitDifferRunner::new(ToolEnvironment::new(dir.path(), PlatformFamily::current()))
            .with_locator(ToolLocator::default());
        let err = runner.run(None).unwrap_err();
        assert!(matches!(err, Error::MissingSettings { param: "settings" }));
    }

    #[test]
    fn invalid_assemblies_fail_before_lookup() {
        let dir = TempDir::new().unwrap();
        let runner = BitDifferRunner::new(ToolEnvironment::new(dir.path(), PlatformFamily::current()))
            .with_locator(ToolLocator::default());
        let err = runner
            .run(Some(&BitDifferSettings::new("a.dll", "b.dll")))
            .unwrap_err();
        assert_eq!(err.field(), Some("previous_assembly_file"));
    }
}
