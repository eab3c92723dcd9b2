//! Nearby monster registry
//!
//! Mirrors the set of monsters the host currently knows about, keyed by
//! handle. Fed by entity add/remove notifications and wiped on every area
//! change, since handles do not survive a transition.

use hashbrown::HashMap;

use crate::entity::{EntityView, MonsterHandle};

/// What the registry keeps per monster. Live fields are re-read through the
/// host at frame time; the metadata path is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterRecord {
    pub handle: MonsterHandle,
    pub metadata: String,
}

#[derive(Debug, Default)]
pub struct EntityRegistry {
    monsters: HashMap<MonsterHandle, MonsterRecord>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly added entity. Non-monsters, null handles and handles
    /// already present are ignored; an existing record is never updated.
    /// Returns true if the entity was inserted.
    pub fn on_added(&mut self, entity: &EntityView) -> bool {
        if !entity.is_monster() {
            return false;
        }
        let Some(handle) = entity.handle() else {
            return false;
        };
        if self.monsters.contains_key(&handle) {
            return false;
        }

        self.monsters.insert(
            handle,
            MonsterRecord {
                handle,
                metadata: entity.metadata.clone(),
            },
        );
        tracing::trace!(handle = handle.get(), metadata = %entity.metadata, "Monster added");
        true
    }

    /// Forget a removed entity. Returns true if it was being tracked.
    pub fn on_removed(&mut self, entity: &EntityView) -> bool {
        if !entity.is_monster() {
            return false;
        }
        let Some(handle) = entity.handle() else {
            return false;
        };
        let removed = self.monsters.remove(&handle).is_some();
        if removed {
            tracing::trace!(handle = handle.get(), "Monster removed");
        }
        removed
    }

    /// Drop everything. Called on every area transition, including
    /// re-entering the same area.
    pub fn on_area_changed(&mut self) {
        tracing::debug!(cleared = self.monsters.len(), "Area changed, clearing monster registry");
        self.monsters.clear();
    }

    pub fn values(&self) -> impl Iterator<Item = &MonsterRecord> {
        self.monsters.values()
    }

    /// Copy of the current handles, safe to walk while the host keeps
    /// delivering notifications.
    pub fn snapshot(&self) -> Vec<MonsterHandle> {
        self.monsters.keys().copied().collect()
    }

    pub fn contains(&self, handle: MonsterHandle) -> bool {
        self.monsters.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}
