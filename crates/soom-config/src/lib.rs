//! Configuration for the soom app.
//!
//! Persists the user's last selections (breathing pattern, scene
//! environment, tick interval) to `config.toml` in the platform config
//! directory. A missing file yields defaults; a malformed file is reported
//! as an error at startup.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// User-facing settings, all optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the breathing pattern selected last.
    pub pattern: String,
    /// Id of the scene environment selected last.
    pub environment: String,
    /// Event-poll timeout driving both state machines, in milliseconds.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: "4-7-8 Technique".to_string(),
            environment: "rain".to_string(),
            tick_ms: 100,
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling back to
    /// defaults when no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Write the config back to disk, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Location of the config file for this platform.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", "soom").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
