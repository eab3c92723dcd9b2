//! Read-only entity views handed over by the host
//!
//! The host owns every entity; this crate only ever sees snapshots of the
//! fields it needs. Any field may be zero, empty or stale by the time a frame
//! reads it, so nothing here is trusted without checking.

use std::num::NonZeroU64;

use glam::Vec3;

/// Stable per-session handle of a live monster. Zero is never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonsterHandle(NonZeroU64);

impl MonsterHandle {
    /// Returns `None` for the null address.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Host-side entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    Monster,
    Player,
    Chest,
    #[default]
    Other,
}

/// Life component of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifeView {
    /// Address of the component itself, 0 when the host failed to read it
    pub address: u64,
    pub current_hp: i32,
}

impl LifeView {
    /// A life record only counts when it resolved and reports positive health.
    pub fn is_alive(&self) -> bool {
        self.address != 0 && self.current_hp > 0
    }
}

/// Snapshot of an entity as exposed by the host
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityView {
    pub kind: EntityKind,
    /// Raw entity address, 0 when invalid
    pub address: u64,
    /// Slash-delimited metadata path, e.g. `Metadata/Monsters/WickerMan/WickerMan`
    pub metadata: String,
    pub render_name: Option<String>,
    pub is_valid: bool,
    pub is_hostile: bool,
    pub position: Vec3,
    pub life: Option<LifeView>,
}

impl EntityView {
    pub fn handle(&self) -> Option<MonsterHandle> {
        MonsterHandle::new(self.address)
    }

    pub fn is_monster(&self) -> bool {
        self.kind == EntityKind::Monster
    }

    /// Last segment of the metadata path (the whole path if it has no `/`)
    pub fn metadata_name(&self) -> &str {
        match self.metadata.rfind('/') {
            Some(idx) => &self.metadata[idx + 1..],
            None => &self.metadata,
        }
    }

    pub fn render_name(&self) -> &str {
        self.render_name.as_deref().unwrap_or_default()
    }
}
