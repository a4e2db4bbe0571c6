// SPDX-License-Identifier: MPL-2.0
//! This module handles the snackbar configuration, including loading and saving
//! option tiers to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `ease` - Easing curve of the entrance and exit transitions
//! - `[global]` - Options applied to every severity
//! - `[error]`, `[success]`, `[info]` - Options for one severity only
//!
//! Every field is optional; unset fields fall through to the next tier and
//! finally to the built-in table in [`defaults`]. Icons and custom close
//! buttons are code-only and attached through [`Layers`] after loading.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SNACKBAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let layers = config.to_layers();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::{DisplayOptions, Ease, Layers, Severity, TextStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNACKBAR_CONFIG_DIR";

/// Serializable subset of [`DisplayOptions`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionsConfig {
    /// Accent color hex code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Visible time before auto-dismiss, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_hide: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,

    /// Entrance and exit duration, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl From<&OptionsConfig> for DisplayOptions {
    fn from(config: &OptionsConfig) -> Self {
        DisplayOptions {
            color: config.color.clone(),
            duration_ms: config.duration_ms,
            auto_hide: config.auto_hide,
            show_close_button: config.show_close_button,
            text_style: config.text_style.clone(),
            animation_duration_ms: config.animation_duration_ms,
            ..DisplayOptions::default()
        }
    }
}

/// Snackbar settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,

    #[serde(default)]
    pub global: OptionsConfig,

    #[serde(default)]
    pub error: OptionsConfig,

    #[serde(default)]
    pub success: OptionsConfig,

    #[serde(default)]
    pub info: OptionsConfig,
}

impl Config {
    /// Returns the section for one severity.
    #[must_use]
    pub fn section(&self, severity: Severity) -> &OptionsConfig {
        match severity {
            Severity::Error => &self.error,
            Severity::Success => &self.success,
            Severity::Info => &self.info,
        }
    }

    /// Builds the resolver tiers described by this file.
    #[must_use]
    pub fn to_layers(&self) -> Layers {
        Severity::ALL.into_iter().fold(
            Layers::new().with_global(DisplayOptions::from(&self.global)),
            |layers, severity| {
                layers.with_severity(severity, DisplayOptions::from(self.section(severity)))
            },
        )
    }

    /// Easing curve, falling back to the default curve.
    #[must_use]
    pub fn ease(&self) -> Ease {
        self.ease.unwrap_or_default()
    }
}

/// Returns the config file path from the environment override or platform default.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(ENV_CONFIG_DIR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()?.join(APP_NAME),
    };
    Some(dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// A missing file yields defaults silently. An unreadable or malformed file
/// yields defaults plus a warning message for the caller to surface.
pub fn load() -> (Config, Option<String>) {
    match default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (Config::default(), None),
    }
}

/// Like [`load`], but for an explicit path.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default snackbar config");
            (Config::default(), Some(err.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
