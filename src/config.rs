// config.rs

use crate::error::SetupError;
use crate::todo::{FilterMode, IdPolicy};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SESSION_TODO_CONFIG";
pub const LOG_ENV: &str = "SESSION_TODO_LOG";

const APP_NAME: &str = "session-todo";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub id_policy: IdPolicy,
    pub default_filter: FilterMode,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            default_filter: FilterMode::default(),
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// `$SESSION_TODO_CONFIG`, else `config.json` in the platform config dir.
pub fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    project_dirs().map(|d| d.config_dir().join("config.json"))
}

fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!("{APP_NAME}.log"))
}

impl Config {
    /// Loads the config from the default location. A missing file yields the
    /// defaults.
    pub fn load() -> Result<Self, SetupError> {
        match config_path() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SetupError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| SetupError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}
