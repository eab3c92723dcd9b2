//! Plugin facade
//!
//! `SpectrePlugin` is what a host drives: lifecycle notifications go to the
//! registry, and `render` runs once per frame. The frame is:
//!
//! ```text
//! reload key held? ──yes──> reload body list, end frame
//!        │no
//! in game, not town, registry non-empty? ──no──> end frame
//!        │yes
//! for each tracked monster: resolve ─> filter ─> project ─> draw
//! ```
//!
//! Nothing in here returns an error to the host. Load failures are logged
//! and the previous body list stays active.

use std::path::PathBuf;
use std::time::Instant;

use spectre_types::AppConfig;

use crate::entity::EntityView;
use crate::filter::{FrameContext, check};
use crate::host::{Camera, EntityResolver, GameState, Graphics, KeyInput};
use crate::labels::LabelRenderer;
use crate::registry::EntityRegistry;
use crate::reload::ReloadController;
use crate::whitelist::{WhitelistStore, log_load_error};

/// Why a frame drew nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleReason {
    NotInGame,
    Town,
    NoMonsters,
    NoPlayer,
}

/// What a call to `render` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Master toggle is off
    Disabled,
    /// The reload key consumed this frame
    Reloaded { success: bool },
    Idle(IdleReason),
    /// Labels drawn this frame (may be zero)
    Drawn { labels: usize },
}

pub struct SpectrePlugin {
    config: AppConfig,
    registry: EntityRegistry,
    bodies: WhitelistStore,
    reload: ReloadController,
}

impl SpectrePlugin {
    pub fn new(config: AppConfig, body_list_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            registry: EntityRegistry::new(),
            bodies: WhitelistStore::new(body_list_path),
            reload: ReloadController::default(),
        }
    }

    /// Bootstrap the body list (writing the default one if missing), load it
    /// and register the reload key. Failures are logged and the plugin still
    /// starts with an empty list. Returns whether a list was loaded.
    pub fn initialise(&mut self, input: &mut impl KeyInput) -> bool {
        if let Err(e) = self.bodies.ensure_default_file() {
            log_load_error(&e);
        }
        let loaded = self.bodies.reload_logged();
        input.register_key(&self.config.hotkeys.reload_list);
        loaded
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Host notifications
    // ─────────────────────────────────────────────────────────────────────────

    pub fn entity_added(&mut self, entity: &EntityView) {
        self.registry.on_added(entity);
    }

    pub fn entity_removed(&mut self, entity: &EntityView) {
        self.registry.on_removed(entity);
    }

    pub fn area_changed(&mut self) {
        self.registry.on_area_changed();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame
    // ─────────────────────────────────────────────────────────────────────────

    pub fn render<H, G>(&mut self, host: &H, graphics: &mut G, now: Instant) -> FrameOutcome
    where
        H: GameState + EntityResolver + KeyInput + Camera,
        G: Graphics,
    {
        if !self.config.enabled {
            return FrameOutcome::Disabled;
        }

        let key_down = host.is_key_down(&self.config.hotkeys.reload_list);
        if self.reload.poll(key_down, now) {
            let success = self.bodies.reload_logged();
            return FrameOutcome::Reloaded { success };
        }

        let ctx = match self.frame_context(host) {
            Ok(ctx) => ctx,
            Err(reason) => return FrameOutcome::Idle(reason),
        };

        let whitelist = self.bodies.whitelist();
        let mut labels = LabelRenderer::new(host, graphics);
        let mut drawn = 0;

        for handle in self.registry.snapshot() {
            let entity = host.resolve(handle);
            match check(entity.as_ref(), &ctx, whitelist) {
                Ok(()) => {
                    if let Some(entity) = &entity
                        && labels.draw_label(entity, &ctx)
                    {
                        drawn += 1;
                    }
                }
                Err(rejection) => {
                    tracing::trace!(handle = handle.get(), ?rejection, "Body skipped");
                }
            }
        }

        FrameOutcome::Drawn { labels: drawn }
    }

    fn frame_context(&self, game: &impl GameState) -> Result<FrameContext, IdleReason> {
        if !game.in_game() {
            return Err(IdleReason::NotInGame);
        }
        if game.is_town() {
            return Err(IdleReason::Town);
        }
        if self.registry.is_empty() {
            return Err(IdleReason::NoMonsters);
        }
        let player = game.player_position().ok_or(IdleReason::NoPlayer)?;
        Ok(FrameContext::new(&self.config, player))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replace the settings. A changed reload key still needs registering by
    /// the host.
    pub fn set_config(&mut self, config: AppConfig) {
        self.config = config;
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn bodies(&self) -> &WhitelistStore {
        &self.bodies
    }
}

#[cfg(test)]
mod tests;
