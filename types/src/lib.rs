//! Shared configuration types for the spectre body overlay
//!
//! This crate contains the serializable settings shared between the core
//! plugin logic (spectre-core) and the rendering host (spectre-overlay).
//! Persistence lives in spectre-core; this crate only knows the shape.

use serde::{Deserialize, Serialize};

/// RGBA color, 0-255 per channel
pub type Color = [u8; 4];

pub mod label_colors {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255, 255];
    pub const BLACK: Color = [0, 0, 0, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Ranges (menu slider bounds, also used for clamping loaded values)
// ─────────────────────────────────────────────────────────────────────────────

pub const TEXT_OFFSET_MIN: i32 = -360;
pub const TEXT_OFFSET_MAX: i32 = 360;
pub const TEXT_OFFSET_DEFAULT: i32 = 120;

pub const TEXT_SIZE_MIN: u32 = 1;
pub const TEXT_SIZE_MAX: u32 = 200;
pub const TEXT_SIZE_DEFAULT: u32 = 16;

pub const DRAW_DISTANCE_MIN: u32 = 0;
pub const DRAW_DISTANCE_MAX: u32 = 2000;
pub const DRAW_DISTANCE_DEFAULT: u32 = 600;

/// Default key for reloading the body list
pub const RELOAD_KEY_DEFAULT: &str = "F6";

/// File name of the whitelist, relative to the plugin directory
pub const BODY_LIST_FILE_NAME: &str = "SpectreBodyList.txt";

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_reload_key() -> String {
    RELOAD_KEY_DEFAULT.to_string()
}
fn default_text_color() -> Color {
    label_colors::WHITE
}
fn default_background_color() -> Color {
    label_colors::BLACK
}
fn default_text_size() -> u32 {
    TEXT_SIZE_DEFAULT
}
fn default_text_offset() -> i32 {
    TEXT_OFFSET_DEFAULT
}
fn default_draw_distance() -> u32 {
    DRAW_DISTANCE_DEFAULT
}

// ─────────────────────────────────────────────────────────────────────────────
// Hotkeys
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySettings {
    /// Key that reloads the body list while held (polled every frame)
    #[serde(default = "default_reload_key")]
    pub reload_list: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            reload_list: default_reload_key(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Label Appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Appearance of the labels drawn above corpses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAppearanceConfig {
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    /// Clamped to [TEXT_SIZE_MIN, TEXT_SIZE_MAX]
    #[serde(default = "default_text_size")]
    pub text_size: u32,
    /// Vertical world offset applied before projection.
    /// Clamped to [TEXT_OFFSET_MIN, TEXT_OFFSET_MAX]
    #[serde(default = "default_text_offset")]
    pub text_offset: i32,
    /// Prefer the in-game render name over the metadata path tail
    #[serde(default = "default_true")]
    pub use_render_names: bool,
}

impl Default for LabelAppearanceConfig {
    fn default() -> Self {
        Self {
            text_color: label_colors::WHITE,
            background_color: label_colors::BLACK,
            text_size: TEXT_SIZE_DEFAULT,
            text_offset: TEXT_OFFSET_DEFAULT,
            use_render_names: true,
        }
    }
}

impl LabelAppearanceConfig {
    /// Get the clamped text size
    pub fn clamped_text_size(&self) -> u32 {
        self.text_size.clamp(TEXT_SIZE_MIN, TEXT_SIZE_MAX)
    }

    /// Get the clamped vertical offset
    pub fn clamped_text_offset(&self) -> i32 {
        self.text_offset.clamp(TEXT_OFFSET_MIN, TEXT_OFFSET_MAX)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level plugin configuration.
///
/// Note: Persistence methods (load/save) are provided by spectre-core via the
/// `AppConfigExt` trait, as they require platform-specific dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Master enable toggle
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub hotkeys: HotkeySettings,
    #[serde(default)]
    pub labels: LabelAppearanceConfig,
    /// Maximum distance from the player at which corpses are labeled.
    /// Clamped to [DRAW_DISTANCE_MIN, DRAW_DISTANCE_MAX]
    #[serde(default = "default_draw_distance")]
    pub draw_distance: u32,
    /// Override for the body list location. Defaults to the plugin directory.
    #[serde(default)]
    pub body_list_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hotkeys: HotkeySettings::default(),
            labels: LabelAppearanceConfig::default(),
            draw_distance: DRAW_DISTANCE_DEFAULT,
            body_list_path: None,
        }
    }
}

impl AppConfig {
    /// Get the clamped draw distance
    pub fn clamped_draw_distance(&self) -> u32 {
        self.draw_distance.clamp(DRAW_DISTANCE_MIN, DRAW_DISTANCE_MAX)
    }
}
