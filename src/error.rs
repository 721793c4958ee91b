//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, XML and JSON errors, and provides semantic variants
//! for settings validation, tool lookup and process launch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML report error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Settings file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required parameter: {param}")]
    MissingSettings { param: &'static str },

    #[error("Invalid setting {field}: file should be set and exist (got: {path})")]
    InvalidArtifact { field: &'static str, path: String },

    #[error("BitDiffer.Console could not be found: {reason}")]
    ToolNotFound { reason: String },

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Name of the offending settings field, when the error is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingSettings { param } => Some(*param),
            Error::InvalidArtifact { field, .. } => Some(*field),
            _ => None,
        }
    }
}
