use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Number of transaction / activity rows shown when nothing else is configured.
pub const DEFAULT_REPORT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
    /// Print technician passwords and account PINs in cleartext.
    #[serde(default)]
    pub show_secrets: bool,
}

fn default_database() -> String {
    "data/atm_database.db".to_string()
}
fn default_report_limit() -> usize {
    DEFAULT_REPORT_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            report_limit: default_report_limit(),
            show_secrets: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("atmaudit")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".atmaudit")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("atmaudit.conf")
    }

    /// Load configuration from the standard location, or defaults if missing
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
