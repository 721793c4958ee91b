use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not load settings from {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: bitdiffer_runner::Error,
    },

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Comparison(#[from] bitdiffer_runner::Error),
}
