//! Top-down orthographic camera
//!
//! Ground-plane X/Y map to screen X/Y with the Y axis flipped. Height (Z)
//! lifts a point straight up the screen by the same scale.

use glam::{Vec2, Vec3};
use spectre_core::Camera;

use crate::utils::within_viewport;

#[derive(Debug, Clone, Copy)]
pub struct ScreenCamera {
    /// World point shown at the viewport centre
    pub center: Vec3,
    /// Viewport size in pixels
    pub viewport_size: Vec2,
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

impl ScreenCamera {
    pub fn new(center: Vec3, viewport_size: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            center,
            viewport_size,
            pixels_per_unit,
        }
    }

    /// Re-centre on a new world point (usually the player)
    pub fn follow(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Unclipped projection; may land outside the viewport
    pub fn project(&self, world: Vec3) -> Vec2 {
        let relative = (world - self.center) * self.pixels_per_unit;
        Vec2::new(
            self.viewport_size.x / 2.0 + relative.x,
            self.viewport_size.y / 2.0 - relative.y - relative.z, // Y-flip for screen coords
        )
    }
}

impl Camera for ScreenCamera {
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let screen = self.project(world);
        within_viewport(screen, self.viewport_size.x, self.viewport_size.y).then_some(screen)
    }
}
