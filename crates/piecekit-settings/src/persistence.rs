//! Settings Persistence
//!
//! Handles loading and saving the configuration from/to the platform config
//! directory, falling back to defaults when no file exists yet.

use crate::config::Config;
use crate::error::{ConfigError, SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name under the platform config directory
const APP_DIR: &str = "piecekit";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Create a persistence layer bound to `path` with default config
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Platform default location, e.g. `~/.config/piecekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load settings from `path`, or use defaults if the file does not exist
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }

        let config = Config::load_from_file(&path)?;
        debug!("Loaded settings from {}", path.display());
        Ok(Self { config, path })
    }

    /// Save settings to the bound path, creating parent directories
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Path the settings are bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}
