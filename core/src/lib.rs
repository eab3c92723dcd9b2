pub mod context;
pub mod entity;
pub mod filter;
pub mod host;
pub mod labels;
pub mod plugin;
pub mod registry;
pub mod reload;
pub mod whitelist;

// Re-exports for convenience
pub use context::{AppConfig, AppConfigExt, ConfigError};
pub use entity::{EntityKind, EntityView, LifeView, MonsterHandle};
pub use filter::{FrameContext, Rejection, check, display_name, should_label};
pub use host::{Camera, EntityResolver, GameState, Graphics, KeyInput, ScreenRect, TextAlign};
pub use labels::{LABEL_MARGIN, LabelRenderer, label_background};
pub use plugin::{FrameOutcome, IdleReason, SpectrePlugin};
pub use registry::{EntityRegistry, MonsterRecord};
pub use reload::{RELOAD_DEBOUNCE, ReloadController};
pub use whitelist::{DEFAULT_BODY_LIST, Whitelist, WhitelistError, WhitelistStore};
