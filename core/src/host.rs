//! Host collaborator interfaces
//!
//! Everything the plugin needs from the game host: game state, entity
//! resolution, camera projection, drawing and key polling. The host
//! implements these; the plugin never reaches around them.

use glam::{Vec2, Vec3};
use spectre_types::Color;

use crate::entity::{EntityView, MonsterHandle};

/// Session-level game state
pub trait GameState {
    fn in_game(&self) -> bool;
    fn is_town(&self) -> bool;
    /// `None` while the player entity is not readable
    fn player_position(&self) -> Option<Vec3>;
}

/// Re-reads a live entity by handle
pub trait EntityResolver {
    /// `None` when the host can no longer resolve the handle
    fn resolve(&self, handle: MonsterHandle) -> Option<EntityView>;
}

/// World-to-screen projection
pub trait Camera {
    /// `None` when the point is off-screen or behind the camera
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Immediate-mode drawing primitives
pub trait Graphics {
    /// Measured (width, height) of the text at the given size
    fn measure_text(&mut self, text: &str, size: f32) -> Vec2;

    /// Draw text with its top edge at `position.y`, anchored horizontally by
    /// `align`. Returns the measured extent.
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, size: f32, align: TextAlign)
    -> Vec2;

    fn draw_box(&mut self, rect: ScreenRect, color: Color);
}

/// Hotkey registration and polling
pub trait KeyInput {
    /// Ask the host to start tracking a key. Hosts that poll everything can
    /// ignore this.
    fn register_key(&mut self, _key: &str) {}

    fn is_key_down(&self, key: &str) -> bool;
}
