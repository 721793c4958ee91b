//! Shared types and enums used across the runner.
//! Includes the tool's `IsolationLevel` and the `PlatformFamily` used for path rendering.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How many AppDomains BitDiffer uses to load the assemblies under comparison.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IsolationLevel {
    /// Let the tool scan the assemblies and pick Medium, or High when strong names collide.
    #[default]
    Auto,
    /// One AppDomain hosts every external assembly.
    Low,
    /// One AppDomain per directory assemblies are loaded from.
    Medium,
    /// One private AppDomain per assembly.
    High,
}

impl IsolationLevel {
    /// Command line tokens for this level. `Auto` is the tool default and renders nothing.
    pub fn to_args(self) -> &'static [&'static str] {
        match self {
            IsolationLevel::Auto => &[],
            IsolationLevel::Low => &["-isolation", "low"],
            IsolationLevel::Medium => &["-isolation", "medium"],
            IsolationLevel::High => &["-isolation", "high"],
        }
    }
}

impl std::fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IsolationLevel::Auto => "Auto",
            IsolationLevel::Low => "Low",
            IsolationLevel::Medium => "Medium",
            IsolationLevel::High => "High",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PlatformFamily {
    Windows,
    Linux,
    MacOs,
    Unknown,
}

impl PlatformFamily {
    /// Family of the compile target.
    pub fn current() -> Self {
        if cfg!(windows) {
            PlatformFamily::Windows
        } else if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else if cfg!(target_os = "linux") {
            PlatformFamily::Linux
        } else {
            PlatformFamily::Unknown
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, PlatformFamily::Windows)
    }

    pub fn separator(self) -> char {
        if self.is_windows() { '\\' } else { '/' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolation_level_renders_tokens() {
        assert!(IsolationLevel::Auto.to_args().is_empty());
        assert_eq!(IsolationLevel::Low.to_args(), ["-isolation", "low"]);
        assert_eq!(IsolationLevel::Medium.to_args(), ["-isolation", "medium"]);
        assert_eq!(IsolationLevel::High.to_args(), ["-isolation", "high"]);
    }

    #[test]
    fn isolation_level_defaults_to_auto() {
        assert_eq!(IsolationLevel::default(), IsolationLevel::Auto);
    }

    #[test]
    fn isolation_level_serializes_lowercase() {
        let json = serde_json::to_string(&IsolationLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: IsolationLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, IsolationLevel::High);
    }
}
