//! Per-frame body filter
//!
//! Decides, for one entity, whether it gets a label this frame. Checks run
//! cheapest first and stop at the first failure. Anything that cannot be
//! read is treated as "no label" rather than an error.

use glam::Vec3;
use spectre_types::{AppConfig, Color};

use crate::entity::EntityView;
use crate::whitelist::Whitelist;

/// Everything the filter and label layout need for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameContext {
    pub player_position: Vec3,
    pub draw_distance: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub text_size: f32,
    /// Vertical world offset applied to entity positions before projection
    pub label_offset: f32,
    pub prefer_render_name: bool,
}

impl FrameContext {
    pub fn new(config: &AppConfig, player_position: Vec3) -> Self {
        Self {
            player_position,
            draw_distance: config.clamped_draw_distance() as f32,
            text_color: config.labels.text_color,
            background_color: config.labels.background_color,
            text_size: config.labels.clamped_text_size() as f32,
            label_offset: config.labels.clamped_text_offset() as f32,
            prefer_render_name: config.labels.use_render_names,
        }
    }
}

/// Why an entity was left unlabeled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Handle no longer resolves to a live entity
    Unresolved,
    NullAddress,
    NoMetadata,
    Invalid,
    NotHostile,
    Alive,
    TooFar,
    NotWhitelisted,
}

/// Run the full check chain on a (possibly unresolved) entity.
pub fn check(
    entity: Option<&EntityView>,
    ctx: &FrameContext,
    whitelist: &Whitelist,
) -> Result<(), Rejection> {
    let entity = entity.ok_or(Rejection::Unresolved)?;

    if entity.address == 0 {
        return Err(Rejection::NullAddress);
    }
    if entity.metadata.is_empty() {
        return Err(Rejection::NoMetadata);
    }
    if !entity.is_valid {
        return Err(Rejection::Invalid);
    }
    if !entity.is_hostile {
        return Err(Rejection::NotHostile);
    }

    // only corpses are interesting; an unreadable life record counts as dead
    if entity.life.is_some_and(|life| life.is_alive()) {
        return Err(Rejection::Alive);
    }

    let distance = entity.position.distance(ctx.player_position);
    if distance.is_nan() || distance > ctx.draw_distance {
        return Err(Rejection::TooFar);
    }

    if !whitelist.matches(&entity.metadata) {
        return Err(Rejection::NotWhitelisted);
    }

    Ok(())
}

pub fn should_label(
    entity: Option<&EntityView>,
    ctx: &FrameContext,
    whitelist: &Whitelist,
) -> bool {
    check(entity, ctx, whitelist).is_ok()
}

/// Label text for an entity.
///
/// With `prefer_render_name` the in-game name is used, falling back to the
/// last metadata path segment when it is empty. Without it the order is
/// reversed.
pub fn display_name(entity: Option<&EntityView>, prefer_render_name: bool) -> String {
    let Some(entity) = entity else {
        return String::new();
    };

    let (preferred, fallback) = if prefer_render_name {
        (entity.render_name(), entity.metadata_name())
    } else {
        (entity.metadata_name(), entity.render_name())
    };

    if preferred.is_empty() {
        fallback.to_string()
    } else {
        preferred.to_string()
    }
}
