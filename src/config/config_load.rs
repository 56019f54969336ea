// src/config/config_load.rs
//
// loading config.toml

use super::config_types::{AnimationConfig, RunConfig, WindowConfig};
use crate::error::RainbowError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub run: RunConfig,
    pub animation: AnimationConfig,
}

impl Config {
    /// Loads config.toml from beside the executable, then from the working
    /// directory. Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, RainbowError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_config_path() {
            if exe_config.exists() {
                return Self::load_from(&exe_config);
            }
        }

        // Fallback to loading from the current working directory
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }

        log::warn!("No {CONFIG_FILE} found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, RainbowError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, RainbowError> {
        let config: Self = toml::from_str(content)?;
        config.animation.validate()?;
        Ok(config)
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }
}
