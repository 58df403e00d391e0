use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_BACKEND: &str = "http://localhost:3000";

/// Overrides the backend address from the config file
pub const BACKEND_ENV: &str = "REMINDER_BACKEND";

/// Overrides the directory `config.json` is read from
pub const CONFIG_DIR_ENV: &str = "REMINDER_CONFIG_DIR";

/// Client configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API URL (or `memory://` for the in-process store)
    #[serde(default = "default_backend")]
    pub backend: String,
}

fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

impl ClientConfig {
    /// The directory holding `config.json`: `$REMINDER_CONFIG_DIR` when set,
    /// otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "reminder", "reminder")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Picks the backend address: flag, then environment, then this config.
    /// Blank values are ignored.
    pub fn resolve_backend(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.into_iter()
            .chain(env)
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(&self.backend)
            .to_string()
    }
}
