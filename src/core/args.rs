//! Settings validation and rendering of the BitDiffer console command line.
//!
//! Token order matters to the console, so [`build_arguments`] always emits flags
//! in the same sequence: output switches first, then the raw report, then the
//! two assemblies (previous before current).
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::paths::{normalized_absolute_path, resolve_on_host};
use crate::core::settings::{BitDifferSettings, ToolEnvironment};
use crate::error::{Error, Result};

/// A single command line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolArgument {
    Plain(String),
    /// Rendered inside double quotes on the display form of the command line.
    Quoted(String),
}

impl ToolArgument {
    pub fn value(&self) -> &str {
        match self {
            ToolArgument::Plain(v) | ToolArgument::Quoted(v) => v,
        }
    }
}

impl fmt::Display for ToolArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolArgument::Plain(v) => write!(f, "{}", v),
            ToolArgument::Quoted(v) => write!(f, "\"{}\"", v),
        }
    }
}

/// Ordered argument list handed to the tool process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArguments {
    args: Vec<ToolArgument>,
}

impl ToolArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(ToolArgument::Plain(arg.into()));
        self
    }

    pub fn append_quoted(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(ToolArgument::Quoted(arg.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolArgument> {
        self.args.iter()
    }

    /// Raw token values, unquoted, as passed to `std::process::Command::args`.
    pub fn as_os_args(&self) -> Vec<&str> {
        self.args.iter().map(ToolArgument::value).collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.args.iter().any(|a| a.value() == token)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for ToolArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

/// Settings whose assembly paths are known to be set and present on disk.
#[derive(Debug, Clone)]
pub struct ValidatedSettings {
    settings: BitDifferSettings,
    previous: PathBuf,
    current: PathBuf,
}

impl ValidatedSettings {
    pub fn validate(settings: Option<&BitDifferSettings>, env: &ToolEnvironment) -> Result<Self> {
        let settings = settings.ok_or(Error::MissingSettings { param: "settings" })?;
        let previous = existing_file(
            settings.previous_assembly_file.as_deref(),
            "previous_assembly_file",
            env,
        )?;
        let current = existing_file(
            settings.current_assembly_file.as_deref(),
            "current_assembly_file",
            env,
        )?;
        Ok(Self {
            settings: settings.clone(),
            previous,
            current,
        })
    }

    pub fn settings(&self) -> &BitDifferSettings {
        &self.settings
    }

    pub fn previous_assembly_file(&self) -> &Path {
        &self.previous
    }

    pub fn current_assembly_file(&self) -> &Path {
        &self.current
    }
}

fn existing_file(
    path: Option<&Path>,
    field: &'static str,
    env: &ToolEnvironment,
) -> Result<PathBuf> {
    match path {
        Some(p) if !p.as_os_str().is_empty() && resolve_on_host(p, env).is_file() => {
            Ok(p.to_path_buf())
        }
        other => Err(Error::InvalidArtifact {
            field,
            path: other
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unset>".to_string()),
        }),
    }
}

/// Render the console flags for `validated`, writing the raw report to `raw_report`.
pub fn build_arguments(
    validated: &ValidatedSettings,
    raw_report: &Path,
    env: &ToolEnvironment,
) -> ToolArguments {
    let settings = validated.settings();
    let mut builder = ToolArguments::new();

    if !settings.report_only_changed {
        builder.append("-all");
    }

    if let Some(out) = settings
        .result_output_file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        builder
            .append("-out")
            .append_quoted(normalized_absolute_path(out, env));
    }

    if settings.compare_only_public {
        builder.append("-publiconly");
    }

    if !settings.compare_implementation {
        builder.append("-noimpl");
    }

    if !settings.compare_assembly_attribute_changes {
        builder.append("-noattrs");
    }

    for token in settings.isolation_level.to_args() {
        builder.append(*token);
    }

    if settings.prefer_gac_version {
        builder.append("-gacfirst");
    }

    if !settings.reflection_only_loading {
        builder.append("-execution");
    }

    builder
        .append("-raw")
        .append_quoted(normalized_absolute_path(raw_report, env));

    builder.append_quoted(normalized_absolute_path(validated.previous_assembly_file(), env));
    builder.append_quoted(normalized_absolute_path(validated.current_assembly_file(), env));

    builder
}
