use crate::error::{ClientbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_USER_PREFS_FILE: &str = "preferences.json";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration, stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Minimum level to log (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where the user preferences file lives
    #[serde(default = "default_user_prefs_file")]
    pub user_prefs_file_path: PathBuf,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_user_prefs_file() -> PathBuf {
    PathBuf::from(DEFAULT_USER_PREFS_FILE)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            user_prefs_file_path: default_user_prefs_file(),
        }
    }
}

impl AppConfig {
    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(ClientbookError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(ClientbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given file
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        crate::store::fs::write_json(config_path.as_ref(), self)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "log-level" => Some(self.log_level.clone()),
            "user-prefs-file" => Some(self.user_prefs_file_path.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "log-level" => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ClientbookError::InvalidArgument(format!(
                        "Unknown log level: {} (expected one of {})",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            "user-prefs-file" => {
                if value.trim().is_empty() {
                    return Err(ClientbookError::InvalidArgument(
                        "user-prefs-file cannot be empty".to_string(),
                    ));
                }
                self.user_prefs_file_path = PathBuf::from(value.trim());
            }
            _ => {
                return Err(ClientbookError::InvalidArgument(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
