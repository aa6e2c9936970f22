//! Global configuration management
//!
//! Provides persistent storage for user preferences. Config is stored at
//! `~/.wellog/config.toml` and loaded leniently: a missing or unreadable
//! file falls back to defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Default port for the local web UI
pub const DEFAULT_UI_PORT: u16 = 7878;

/// Global wellog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Data file override; `None` uses the per-directory default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Web UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Web UI preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UiConfig {
    /// Port the UI server binds to
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_UI_PORT
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or the default if not present or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        fs::create_dir_all(paths::global_config_dir())?;
        let content = toml::to_string_pretty(self)?;
        fs::write(Self::config_path(), content)?;
        Ok(())
    }
}
