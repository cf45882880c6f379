// src/infrastructure/config.rs
use crate::application::StoreSettings;
use crate::constants::{
    APP_DIR_NAME, AUTOSAVE_QUIET_PERIOD_MS, NOTES_SLOT_KEY, TOAST_AUTO_DISMISS_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notekeeper
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub autosave: AutosaveConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StorageConfig {
    /// Data directory; empty means the platform data dir
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default = "default_key")]
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AutosaveConfig {
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ToastConfig {
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
}

fn default_dir() -> String { String::new() }
fn default_key() -> String { NOTES_SLOT_KEY.to_string() }
fn default_quiet_period_ms() -> u64 { AUTOSAVE_QUIET_PERIOD_MS }
fn default_auto_dismiss_ms() -> u64 { TOAST_AUTO_DISMISS_MS }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            key: default_key(),
        }
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: default_quiet_period_ms(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the explicitly given file, else the default location if it exists,
    /// else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Loading config from provided path");
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Directory holding the slot files; `override_dir` wins over the config file.
    pub fn data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if !self.storage.dir.is_empty() {
            return Ok(PathBuf::from(&self.storage.dir));
        }
        let base = dirs::data_dir().context("Could not find data directory")?;
        Ok(base.join(APP_DIR_NAME))
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            slot_key: self.storage.key.clone(),
            quiet_period_ms: self.autosave.quiet_period_ms,
            toast_auto_dismiss_ms: self.toast.auto_dismiss_ms,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}
