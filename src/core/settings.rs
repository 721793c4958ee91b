use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{IsolationLevel, PlatformFamily};

/// Comparison settings suitable for config files and pipeline presets.
///
/// Field defaults follow the BitDiffer console defaults, see
/// <https://github.com/bitdiffer/bitdiffer/wiki/ConsoleApplication>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitDifferSettings {
    /// Previous version of the assembly
    pub previous_assembly_file: Option<PathBuf>,
    /// Current version of the assembly
    pub current_assembly_file: Option<PathBuf>,
    /// Report only assemblies with changes (default: true)
    pub report_only_changed: bool,
    /// Compare only public members (default: false)
    pub compare_only_public: bool,
    /// Compare implementation of methods and properties (default: true)
    pub compare_implementation: bool,
    /// Compare changes in assembly attribute values (default: false)
    pub compare_assembly_attribute_changes: bool,
    /// Human-facing result file (HTML or XML)
    pub result_output_file: Option<PathBuf>,
    pub isolation_level: IsolationLevel,
    /// Load dependent assemblies from the GAC before the current directory (default: false)
    pub prefer_gac_version: bool,
    /// Load assemblies in the reflection-only context (default: true)
    pub reflection_only_loading: bool,

    /// Explicit path to the console executable, skipping lookup
    pub tool_path: Option<PathBuf>,
    /// Host program that runs the tool, e.g. `mono` on Unix
    pub tool_launcher: Option<PathBuf>,
    /// Working directory for path resolution and the tool process
    pub working_directory: Option<PathBuf>,
}

impl Default for BitDifferSettings {
    fn default() -> Self {
        Self {
            previous_assembly_file: None,
            current_assembly_file: None,
            report_only_changed: true,
            compare_only_public: false,
            compare_implementation: true,
            compare_assembly_attribute_changes: false,
            result_output_file: None,
            isolation_level: IsolationLevel::Auto,
            prefer_gac_version: false,
            reflection_only_loading: true,
            tool_path: None,
            tool_launcher: None,
            working_directory: None,
        }
    }
}

impl BitDifferSettings {
    pub fn new(previous: impl Into<PathBuf>, current: impl Into<PathBuf>) -> Self {
        Self {
            previous_assembly_file: Some(previous.into()),
            current_assembly_file: Some(current.into()),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Where relative paths are resolved and which separator style the tool expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEnvironment {
    pub working_directory: PathBuf,
    pub platform: PlatformFamily,
}

impl ToolEnvironment {
    pub fn new(working_directory: impl Into<PathBuf>, platform: PlatformFamily) -> Self {
        Self {
            working_directory: working_directory.into(),
            platform,
        }
    }

    pub fn from_process() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?, PlatformFamily::current()))
    }

    /// Apply the settings' working directory override; relative overrides are
    /// resolved against the current working directory.
    pub fn with_settings(mut self, settings: &BitDifferSettings) -> Self {
        if let Some(dir) = &settings.working_directory {
            self.working_directory = self.working_directory.join(dir);
        }
        self
    }
}
