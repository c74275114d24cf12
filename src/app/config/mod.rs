// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[editor]` - Resize panel defaults (aspect lock, resampling filter)
//!
//! # Path Resolution
//!
//! See [`paths`](crate::app::paths): explicit override, `--config-dir`,
//! `ICED_RESIZER_CONFIG_DIR`, then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_resizer::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Starting state of the aspect-ratio lock for new panels
//! let locked = config.editor.lock_aspect();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::media::ResizeFilter;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Resize panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Whether the aspect-ratio lock starts engaged.
    #[serde(
        default = "default_lock_aspect",
        skip_serializing_if = "Option::is_none"
    )]
    pub lock_aspect_by_default: Option<bool>,

    /// Resampling filter used by the host when applying a resize.
    #[serde(
        default = "default_resize_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_filter: Option<ResizeFilter>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            lock_aspect_by_default: default_lock_aspect(),
            resize_filter: default_resize_filter(),
        }
    }
}

impl EditorConfig {
    pub fn lock_aspect(&self) -> bool {
        self.lock_aspect_by_default.unwrap_or(DEFAULT_LOCK_ASPECT)
    }

    pub fn filter(&self) -> ResizeFilter {
        self.resize_filter.unwrap_or(DEFAULT_RESIZE_FILTER)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_lock_aspect() -> Option<bool> {
    Some(DEFAULT_LOCK_ASPECT)
}

fn default_resize_filter() -> Option<ResizeFilter> {
    Some(DEFAULT_RESIZE_FILTER)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("failed to load {}: {err}", path.display());
            (
                Config::default(),
                Some("status-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
