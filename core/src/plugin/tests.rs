//! Frame-level tests for SpectrePlugin
//!
//! Drives the plugin through a fake host the same way a game loop would:
//! notifications first, then one `render` per frame.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use glam::{Vec2, Vec3};
use spectre_types::{AppConfig, Color};

use super::*;
use crate::entity::{EntityKind, LifeView, MonsterHandle};
use crate::host::{ScreenRect, TextAlign};

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

fn scratch_dir(name: &str) -> PathBuf {
    let n = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "spectre-plugin-{}-{}-{}",
        name,
        std::process::id(),
        n
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake host
// ─────────────────────────────────────────────────────────────────────────────

struct FakeHost {
    in_game: bool,
    town: bool,
    player: Option<Vec3>,
    entities: HashMap<u64, EntityView>,
    keys_down: HashSet<String>,
    registered: Vec<String>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            in_game: true,
            town: false,
            player: Some(Vec3::ZERO),
            entities: HashMap::new(),
            keys_down: HashSet::new(),
            registered: Vec::new(),
        }
    }
}

impl FakeHost {
    /// Adds the entity to the fake world and returns a copy for notifications
    fn spawn(&mut self, entity: EntityView) -> EntityView {
        self.entities.insert(entity.address, entity.clone());
        entity
    }
}

impl GameState for FakeHost {
    fn in_game(&self) -> bool {
        self.in_game
    }
    fn is_town(&self) -> bool {
        self.town
    }
    fn player_position(&self) -> Option<Vec3> {
        self.player
    }
}

impl EntityResolver for FakeHost {
    fn resolve(&self, handle: MonsterHandle) -> Option<EntityView> {
        self.entities.get(&handle.get()).cloned()
    }
}

impl KeyInput for FakeHost {
    fn register_key(&mut self, key: &str) {
        self.registered.push(key.to_string());
    }
    fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }
}

impl Camera for FakeHost {
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        (world.x >= 0.0).then(|| Vec2::new(world.x, world.y - world.z))
    }
}

#[derive(Default)]
struct Canvas {
    texts: Vec<String>,
    boxes: Vec<ScreenRect>,
}

impl Graphics for Canvas {
    fn measure_text(&mut self, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.len() as f32 * size / 2.0, size)
    }
    fn draw_text(&mut self, text: &str, _: Vec2, _: Color, size: f32, _: TextAlign) -> Vec2 {
        self.texts.push(text.to_string());
        self.measure_text(text, size)
    }
    fn draw_box(&mut self, rect: ScreenRect, _: Color) {
        self.boxes.push(rect);
    }
}

fn corpse(address: u64, metadata: &str, x: f32) -> EntityView {
    EntityView {
        kind: EntityKind::Monster,
        address,
        metadata: metadata.to_string(),
        render_name: None,
        is_valid: true,
        is_hostile: true,
        position: Vec3::new(x, 0.0, 0.0),
        life: Some(LifeView {
            address: address + 0x100,
            current_hp: 0,
        }),
    }
}

/// Plugin initialised against a body list containing `content`
fn plugin_with_list(name: &str, content: &str) -> (SpectrePlugin, FakeHost) {
    let path = scratch_dir(name).join("SpectreBodyList.txt");
    fs::write(&path, content).unwrap();

    let mut host = FakeHost::default();
    let mut plugin = SpectrePlugin::new(AppConfig::default(), path);
    assert!(plugin.initialise(&mut host));
    (plugin, host)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_initialise_bootstraps_default_list() {
    let path = scratch_dir("init").join("SpectreBodyList.txt");
    let mut host = FakeHost::default();
    let mut plugin = SpectrePlugin::new(AppConfig::default(), &path);

    assert!(plugin.initialise(&mut host));
    assert!(path.exists());
    assert_eq!(plugin.bodies().len(), 6);
    assert_eq!(host.registered, vec!["F6"]);
}

#[test]
fn test_initialise_survives_unwritable_location() {
    // the parent "directory" is a regular file, so bootstrap must fail
    let dir = scratch_dir("unwritable");
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let mut host = FakeHost::default();
    let mut plugin = SpectrePlugin::new(AppConfig::default(), blocker.join("SpectreBodyList.txt"));
    assert!(!plugin.initialise(&mut host));
    assert!(plugin.bodies().is_empty());
    // the reload key is registered regardless
    assert_eq!(host.registered, vec!["F6"]);
}

#[test]
fn test_labels_matching_corpses() {
    let (mut plugin, mut host) = plugin_with_list("labels", "WickerMan\nKaomWarrior\n");

    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 100.0));
    let kaom = host.spawn(corpse(2, "Metadata/Monsters/KaomWarrior/KaomWarrior7", 200.0));
    let other = host.spawn(corpse(3, "Metadata/Monsters/Zombie/Zombie", 50.0));
    for entity in [&wicker, &kaom, &other] {
        plugin.entity_added(entity);
    }

    let mut canvas = Canvas::default();
    let outcome = plugin.render(&host, &mut canvas, Instant::now());

    assert_eq!(outcome, FrameOutcome::Drawn { labels: 2 });
    let mut texts = canvas.texts.clone();
    texts.sort();
    assert_eq!(texts, vec!["KaomWarrior7", "WickerMan"]);
    assert_eq!(canvas.boxes.len(), 2);
}

#[test]
fn test_frame_short_circuits() {
    let (mut plugin, mut host) = plugin_with_list("short-circuit", "WickerMan\n");
    let mut canvas = Canvas::default();
    let now = Instant::now();

    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Idle(IdleReason::NoMonsters)
    );

    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);

    host.town = true;
    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Idle(IdleReason::Town)
    );

    host.town = false;
    host.in_game = false;
    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Idle(IdleReason::NotInGame)
    );

    host.in_game = true;
    host.player = None;
    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Idle(IdleReason::NoPlayer)
    );

    assert!(canvas.texts.is_empty());
}

#[test]
fn test_disabled_plugin_does_nothing() {
    let (mut plugin, mut host) = plugin_with_list("disabled", "WickerMan\n");
    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);
    host.keys_down.insert("F6".to_string());

    let mut config = plugin.config().clone();
    config.enabled = false;
    plugin.set_config(config);

    let mut canvas = Canvas::default();
    assert_eq!(
        plugin.render(&host, &mut canvas, Instant::now()),
        FrameOutcome::Disabled
    );
    assert!(canvas.texts.is_empty());
}

#[test]
fn test_area_change_stops_labels() {
    let (mut plugin, mut host) = plugin_with_list("area-change", "WickerMan\n");
    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);

    plugin.area_changed();
    assert!(plugin.registry().is_empty());

    let mut canvas = Canvas::default();
    assert_eq!(
        plugin.render(&host, &mut canvas, Instant::now()),
        FrameOutcome::Idle(IdleReason::NoMonsters)
    );
}

#[test]
fn test_stale_handles_are_skipped() {
    let (mut plugin, mut host) = plugin_with_list("stale", "WickerMan\n");
    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);

    // host dropped the entity without a removal notification
    host.entities.clear();

    let mut canvas = Canvas::default();
    assert_eq!(
        plugin.render(&host, &mut canvas, Instant::now()),
        FrameOutcome::Drawn { labels: 0 }
    );
}

#[test]
fn test_fields_are_reread_each_frame() {
    let (mut plugin, mut host) = plugin_with_list("reread", "WickerMan\n");
    let mut wicker = corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0);
    wicker.life = Some(LifeView {
        address: 0x500,
        current_hp: 250,
    });
    let wicker = host.spawn(wicker);
    plugin.entity_added(&wicker);

    let mut canvas = Canvas::default();
    let now = Instant::now();
    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Drawn { labels: 0 }
    );

    // the monster dies after it was added
    if let Some(entity) = host.entities.get_mut(&1) {
        entity.life = Some(LifeView {
            address: 0x500,
            current_hp: 0,
        });
    }
    assert_eq!(
        plugin.render(&host, &mut canvas, now),
        FrameOutcome::Drawn { labels: 1 }
    );
}

#[test]
fn test_offscreen_bodies_not_counted() {
    let (mut plugin, mut host) = plugin_with_list("offscreen", "WickerMan\n");
    let visible = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    let behind = host.spawn(corpse(2, "Metadata/Monsters/WickerMan/WickerMan", -10.0));
    plugin.entity_added(&visible);
    plugin.entity_added(&behind);

    let mut canvas = Canvas::default();
    assert_eq!(
        plugin.render(&host, &mut canvas, Instant::now()),
        FrameOutcome::Drawn { labels: 1 }
    );
}

#[test]
fn test_reload_key_consumes_frame_and_is_debounced() {
    let dir = scratch_dir("reload");
    let path = dir.join("SpectreBodyList.txt");
    fs::write(&path, "KaomWarrior\n").unwrap();

    let mut host = FakeHost::default();
    let mut plugin = SpectrePlugin::new(AppConfig::default(), &path);
    plugin.initialise(&mut host);

    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);

    let mut canvas = Canvas::default();
    let start = Instant::now();
    assert_eq!(
        plugin.render(&host, &mut canvas, start),
        FrameOutcome::Drawn { labels: 0 }
    );

    fs::write(&path, "WickerMan\n").unwrap();
    host.keys_down.insert("F6".to_string());

    assert_eq!(
        plugin.render(&host, &mut canvas, start),
        FrameOutcome::Reloaded { success: true }
    );
    assert!(canvas.texts.is_empty());

    // still held on the next frame: debounced, so the frame renders normally
    assert_eq!(
        plugin.render(&host, &mut canvas, start + Duration::from_millis(16)),
        FrameOutcome::Drawn { labels: 1 }
    );

    // held past the window: reloads again
    assert_eq!(
        plugin.render(&host, &mut canvas, start + Duration::from_millis(520)),
        FrameOutcome::Reloaded { success: true }
    );
}

#[test]
fn test_failed_reload_keeps_labels() {
    let dir = scratch_dir("failed-reload");
    let path = dir.join("SpectreBodyList.txt");
    fs::write(&path, "WickerMan\n").unwrap();

    let mut host = FakeHost::default();
    let mut plugin = SpectrePlugin::new(AppConfig::default(), &path);
    plugin.initialise(&mut host);
    let wicker = host.spawn(corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0));
    plugin.entity_added(&wicker);

    fs::remove_file(&path).unwrap();
    host.keys_down.insert("F6".to_string());

    let mut canvas = Canvas::default();
    let start = Instant::now();
    assert_eq!(
        plugin.render(&host, &mut canvas, start),
        FrameOutcome::Reloaded { success: false }
    );

    host.keys_down.clear();
    assert_eq!(
        plugin.render(&host, &mut canvas, start + Duration::from_millis(16)),
        FrameOutcome::Drawn { labels: 1 }
    );
}

#[test]
fn test_render_name_preference() {
    let (mut plugin, mut host) = plugin_with_list("render-name", "WickerMan\n");
    let mut wicker = corpse(1, "Metadata/Monsters/WickerMan/WickerMan", 10.0);
    wicker.render_name = Some("Wicker Man".to_string());
    let wicker = host.spawn(wicker);
    plugin.entity_added(&wicker);

    let mut canvas = Canvas::default();
    let now = Instant::now();
    plugin.render(&host, &mut canvas, now);

    let mut config = plugin.config().clone();
    config.labels.use_render_names = false;
    plugin.set_config(config);
    plugin.render(&host, &mut canvas, now);

    assert_eq!(canvas.texts, vec!["Wicker Man", "WickerMan"]);
}
