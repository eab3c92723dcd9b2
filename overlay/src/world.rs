//! Scripted stand-in for a game client
//!
//! `SimulatedWorld` owns a handful of entities, a player and a camera, and
//! answers every host query the plugin makes. The demo binary and the
//! integration tests drive the plugin through it.

use std::collections::{HashMap, HashSet};

use glam::{Vec2, Vec3};
use spectre_core::{
    Camera, EntityKind, EntityResolver, EntityView, GameState, KeyInput, LifeView, MonsterHandle,
};

use crate::camera::ScreenCamera;

pub struct SimulatedWorld {
    pub in_game: bool,
    pub is_town: bool,
    player: Option<Vec3>,
    camera: ScreenCamera,
    entities: HashMap<MonsterHandle, EntityView>,
    keys_down: HashSet<String>,
    registered_keys: Vec<String>,
}

impl SimulatedWorld {
    pub fn new(camera: ScreenCamera) -> Self {
        Self {
            in_game: true,
            is_town: false,
            player: Some(camera.center),
            camera,
            entities: HashMap::new(),
            keys_down: HashSet::new(),
            registered_keys: Vec::new(),
        }
    }

    /// Move the player; the camera follows.
    pub fn move_player(&mut self, position: Vec3) {
        self.player = Some(position);
        self.camera.follow(position);
    }

    pub fn hide_player(&mut self) {
        self.player = None;
    }

    /// Place an entity in the world. Returns a copy for lifecycle
    /// notifications, or `None` if it has no usable handle.
    pub fn spawn(&mut self, entity: EntityView) -> Option<EntityView> {
        let handle = entity.handle()?;
        self.entities.insert(handle, entity.clone());
        Some(entity)
    }

    pub fn despawn(&mut self, handle: MonsterHandle) -> Option<EntityView> {
        self.entities.remove(&handle)
    }

    /// Set a tracked entity's health. A kill (0 HP) turns it into a body.
    pub fn set_hp(&mut self, handle: MonsterHandle, current_hp: i32) {
        if let Some(entity) = self.entities.get_mut(&handle)
            && let Some(life) = entity.life.as_mut()
        {
            life.current_hp = current_hp;
        }
    }

    /// Forget every entity, as the client does on an area transition
    pub fn change_area(&mut self) {
        self.entities.clear();
    }

    pub fn press(&mut self, key: &str) {
        self.keys_down.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.keys_down.remove(key);
    }

    pub fn registered_keys(&self) -> &[String] {
        &self.registered_keys
    }
}

/// A hostile monster at `position` with the given health
pub fn monster(address: u64, metadata: &str, name: &str, position: Vec3, hp: i32) -> EntityView {
    EntityView {
        kind: EntityKind::Monster,
        address,
        metadata: metadata.to_string(),
        render_name: Some(name.to_string()),
        is_valid: true,
        is_hostile: true,
        position,
        life: Some(LifeView {
            address: address + 0x100,
            current_hp: hp,
        }),
    }
}

impl GameState for SimulatedWorld {
    fn in_game(&self) -> bool {
        self.in_game
    }

    fn is_town(&self) -> bool {
        self.is_town
    }

    fn player_position(&self) -> Option<Vec3> {
        self.player
    }
}

impl EntityResolver for SimulatedWorld {
    fn resolve(&self, handle: MonsterHandle) -> Option<EntityView> {
        self.entities.get(&handle).cloned()
    }
}

impl Camera for SimulatedWorld {
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        self.camera.world_to_screen(world)
    }
}

impl KeyInput for SimulatedWorld {
    fn register_key(&mut self, key: &str) {
        if !self.registered_keys.iter().any(|k| k == key) {
            self.registered_keys.push(key.to_string());
        }
    }

    fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }
}
