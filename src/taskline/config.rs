use crate::error::{Result, TasklineError};
use crate::model::DEFAULT_BOARD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Configuration for taskline, stored in `config.json` inside the taskline directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TasklineConfig {
    /// Custom storage directory. Must already exist when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taskline_directory: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub display_complete_tasks: bool,

    #[serde(default = "default_true")]
    pub display_progress_overview: bool,

    /// chrono format string used to parse due dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Board for items created without one.
    #[serde(default = "default_board")]
    pub default_board: String,
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_board() -> String {
    DEFAULT_BOARD.to_string()
}

impl Default for TasklineConfig {
    fn default() -> Self {
        Self {
            taskline_directory: None,
            display_complete_tasks: true,
            display_progress_overview: true,
            date_format: default_date_format(),
            default_board: default_board(),
        }
    }
}

impl TasklineConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TasklineError::Io)?;
        let config: TasklineConfig =
            serde_json::from_str(&content).map_err(TasklineError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TasklineError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TasklineError::Serialization)?;
        fs::write(config_path, content).map_err(TasklineError::Io)?;
        Ok(())
    }

    /// Resolves where item data lives: the custom directory when configured, else
    /// `fallback`. A configured directory that does not exist is an error.
    pub fn storage_dir(&self, fallback: &Path) -> Result<PathBuf> {
        match &self.taskline_directory {
            Some(custom) if !custom.is_dir() => Err(TasklineError::Store(format!(
                "Custom app directory was not found on your system: {}",
                custom.display()
            ))),
            Some(custom) => Ok(custom.join(".taskline")),
            None => Ok(fallback.to_path_buf()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TasklineConfig::default();
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.default_board, "My Board");
        assert!(config.display_complete_tasks);
        assert!(config.display_progress_overview);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TasklineConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, TasklineConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config = TasklineConfig {
            display_complete_tasks: false,
            date_format: "%Y-%m-%d".to_string(),
            ..Default::default()
        };
        config.save(temp.path()).unwrap();

        let loaded = TasklineConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "displayProgressOverview": false }"#,
        )
        .unwrap();

        let config = TasklineConfig::load(temp.path()).unwrap();
        assert!(!config.display_progress_overview);
        assert!(config.display_complete_tasks);
        assert_eq!(config.default_board, "My Board");
    }

    #[test]
    fn test_missing_custom_directory_is_store_error() {
        let temp = TempDir::new().unwrap();
        let config = TasklineConfig {
            taskline_directory: Some(temp.path().join("missing")),
            ..Default::default()
        };

        let err = config.storage_dir(temp.path()).unwrap_err();
        assert!(matches!(err, TasklineError::Store(_)));
        assert!(err.to_string().contains("Custom app directory"));
    }

    #[test]
    fn test_custom_directory_is_used() {
        let temp = TempDir::new().unwrap();
        let config = TasklineConfig {
            taskline_directory: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let dir = config.storage_dir(Path::new("/unused")).unwrap();
        assert_eq!(dir, temp.path().join(".taskline"));
    }
}
