use crate::api::TasklineApi;
use crate::config::TasklineConfig;
use crate::error::{Result, TasklineError};
use crate::store::fs::FileStore;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const APP_DIR_NAME: &str = ".taskline";

pub struct TasklineContext {
    pub api: TasklineApi<FileStore>,
    /// Directory holding `config.json`.
    pub config_dir: PathBuf,
}

/// `~/.taskline`
pub fn default_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(APP_DIR_NAME))
        .ok_or_else(|| TasklineError::Store("Could not determine home directory".to_string()))
}

/// Builds the API from the configuration found in `dir_override`, or in the default
/// directory. An unreadable config falls back to defaults; a configured custom directory
/// that is missing is an error.
pub fn initialize(dir_override: Option<&Path>) -> Result<TasklineContext> {
    let config_dir = match dir_override {
        Some(dir) => dir.to_path_buf(),
        None => default_dir()?,
    };

    let config = TasklineConfig::load(&config_dir).unwrap_or_else(|err| {
        warn!(%err, "ignoring unreadable config");
        TasklineConfig::default()
    });
    let storage_dir = config.storage_dir(&config_dir)?;
    debug!(config_dir = %config_dir.display(), storage_dir = %storage_dir.display(), "initialized");

    let api = TasklineApi::new(FileStore::new(storage_dir), config);
    Ok(TasklineContext { api, config_dir })
}
