//! TOML-based configuration of default inputs.
//!
//! Stores the values used when the caller does not supply them:
//! - Weekday and weekend sleep windows
//! - Alertness model knobs
//! - Daily sleep loss for the debt view
//! - Chart display preferences
//!
//! Configuration is read from `~/.config/jetlag/config.toml` (see
//! [`config_path`](super::config_path)). It is never written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config_path;
use crate::alertness::AlertnessInputs;
use crate::error::ConfigError;
use crate::sleep::{normalize_window, DisplayMode, SleepWindow};

/// Bed and wake times for one schedule, as "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub bed: String,
    pub wake: String,
}

impl WindowConfig {
    pub fn new(bed: impl Into<String>, wake: impl Into<String>) -> Self {
        Self {
            bed: bed.into(),
            wake: wake.into(),
        }
    }

    /// Leniently parsed window; malformed strings yield NaN fields.
    pub fn window(&self) -> SleepWindow {
        normalize_window(&self.bed, &self.wake)
    }
}

/// Sleep debt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtConfig {
    #[serde(default = "default_daily_loss")]
    pub daily_loss_hours: f64,
}

/// Chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML. Every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_weekday")]
    pub weekday: WindowConfig,
    #[serde(default = "default_weekend")]
    pub weekend: WindowConfig,
    #[serde(default)]
    pub alertness: AlertnessInputs,
    #[serde(default)]
    pub debt: DebtConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

// Default functions
fn default_weekday() -> WindowConfig {
    WindowConfig::new("23:00", "07:00")
}
fn default_weekend() -> WindowConfig {
    WindowConfig::new("23:30", "09:00")
}
fn default_daily_loss() -> f64 {
    1.0
}
fn default_bar_width() -> usize {
    30
}

impl Default for DebtConfig {
    fn default() -> Self {
        Self {
            daily_loss_hours: default_daily_loss(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            bar_width: default_bar_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weekday: default_weekday(),
            weekend: default_weekend(),
            alertness: AlertnessInputs::default(),
            debt: DebtConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    pub fn path() -> PathBuf {
        config_path()
    }

    /// Load from the default location, or return defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Load from an explicit path, or return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg = Self::from_toml_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] on malformed TOML or mistyped
    /// values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value cannot be represented
    /// in TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".into(),
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn weekday_window(&self) -> SleepWindow {
        self.weekday.window()
    }

    pub fn weekend_window(&self) -> SleepWindow {
        self.weekend.window()
    }
}
