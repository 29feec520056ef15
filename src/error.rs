// error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of user input by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text cannot be empty")]
    EmptyText,
}

/// Startup failures: configuration and log setup. None of these stop the UI.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
