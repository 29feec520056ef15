// logging.rs
//
// The terminal belongs to the UI, so tracing output goes to a file.

use crate::config::{Config, LOG_ENV};
use crate::error::SetupError;
use std::fs::{OpenOptions, create_dir_all};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber and returns the log file path.
/// `$SESSION_TODO_LOG` takes precedence over `log_filter` from the config.
pub fn init(config: &Config) -> Result<PathBuf, SetupError> {
    let path = config.log_path();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|source| SetupError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| SetupError::Io {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| SetupError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| SetupError::Logging(e.to_string()))?;

    Ok(path)
}
