mod config;
mod error;

pub use config::{
    APP_NAME, AppConfig, AppConfigExt, BODY_LIST_FILE_NAME, Color, DRAW_DISTANCE_DEFAULT,
    DRAW_DISTANCE_MAX, DRAW_DISTANCE_MIN, HotkeySettings, LabelAppearanceConfig,
    RELOAD_KEY_DEFAULT, TEXT_OFFSET_DEFAULT, TEXT_OFFSET_MAX, TEXT_OFFSET_MIN, TEXT_SIZE_DEFAULT,
    TEXT_SIZE_MAX, TEXT_SIZE_MIN, label_colors, plugin_directory,
};
pub use error::ConfigError;
