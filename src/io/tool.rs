use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::paths::resolve_on_host;
use crate::core::settings::{BitDifferSettings, ToolEnvironment};
use crate::error::{Error, Result};

pub const TOOL_NAME: &str = "BitDiffer.Console";
pub const TOOL_EXECUTABLE_NAMES: [&str; 2] = ["BitDiffer.Console.exe", "BitDiffer.Console"];
/// Environment variable holding an explicit path to the console executable.
pub const TOOL_PATH_ENV: &str = "BITDIFFER_CONSOLE";

/// Program to spawn, optionally behind a launcher such as `mono`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub leading_args: Vec<PathBuf>,
}

impl ToolCommand {
    fn new(tool: PathBuf, launcher: Option<&Path>) -> Self {
        match launcher {
            Some(launcher) => Self {
                program: launcher.to_path_buf(),
                leading_args: vec![tool],
            },
            None => Self {
                program: tool,
                leading_args: Vec::new(),
            },
        }
    }
}

/// Finds the console executable: explicit setting, then `BITDIFFER_CONSOLE`, then `PATH`.
#[derive(Debug, Clone, Default)]
pub struct ToolLocator {
    env_override: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl ToolLocator {
    pub fn new(env_override: Option<PathBuf>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            env_override,
            search_dirs,
        }
    }

    pub fn from_process_env() -> Self {
        let env_override = std::env::var_os(TOOL_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let search_dirs = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        Self::new(env_override, search_dirs)
    }

    pub fn locate(&self, settings: &BitDifferSettings, env: &ToolEnvironment) -> Result<ToolCommand> {
        let launcher = settings.tool_launcher.as_deref();

        if let Some(explicit) = &settings.tool_path {
            let resolved = resolve_on_host(explicit, env);
            if !resolved.is_file() {
                return Err(Error::ToolNotFound {
                    reason: format!("configured tool path {} does not exist", resolved.display()),
                });
            }
            return Ok(ToolCommand::new(resolved, launcher));
        }

        if let Some(from_env) = &self.env_override {
            let resolved = resolve_on_host(from_env, env);
            if !resolved.is_file() {
                return Err(Error::ToolNotFound {
                    reason: format!("{TOOL_PATH_ENV} points to missing file {}", resolved.display()),
                });
            }
            return Ok(ToolCommand::new(resolved, launcher));
        }

        for dir in &self.search_dirs {
            for name in TOOL_EXECUTABLE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    debug!("Found {} at {:?}", TOOL_NAME, candidate);
                    return Ok(ToolCommand::new(candidate, launcher));
                }
            }
        }

        Err(Error::ToolNotFound {
            reason: format!(
                "none of {:?} found on PATH; set tool_path or {}",
                TOOL_EXECUTABLE_NAMES, TOOL_PATH_ENV
            ),
        })
    }
}
