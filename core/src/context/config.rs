//! Application configuration
//!
//! This module re-exports shared types from spectre-types and provides
//! persistence and plugin directory resolution for AppConfig.

use std::path::PathBuf;

pub use spectre_types::{
    AppConfig, BODY_LIST_FILE_NAME, Color, DRAW_DISTANCE_DEFAULT, DRAW_DISTANCE_MAX,
    DRAW_DISTANCE_MIN, HotkeySettings, LabelAppearanceConfig, RELOAD_KEY_DEFAULT,
    TEXT_OFFSET_DEFAULT, TEXT_OFFSET_MAX, TEXT_OFFSET_MIN, TEXT_SIZE_DEFAULT, TEXT_SIZE_MAX,
    TEXT_SIZE_MIN, label_colors,
};

use super::error::ConfigError;

/// Application name used for the config and plugin directories
pub const APP_NAME: &str = "spectre-bodies";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Directory holding the plugin's own files (`~/.config/spectre-bodies` on
/// Linux, `%APPDATA%\spectre-bodies` on Windows). Falls back to the working
/// directory when the platform has no config dir.
pub fn plugin_directory() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    /// Load the stored config, or defaults when none exists or it can't be read
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    /// Where the body list lives: the configured override, or the plugin
    /// directory
    fn body_list_path(&self) -> PathBuf;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            AppConfig::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn body_list_path(&self) -> PathBuf {
        match self.body_list_path.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => plugin_directory().join(BODY_LIST_FILE_NAME),
        }
    }
}
