//! Wires the plugin to the simulated world and the software canvas
//!
//! A `Session` plays the host's part: it forwards lifecycle notifications,
//! clears the canvas before every frame and hands the plugin its
//! collaborators.

use std::path::PathBuf;
use std::time::Instant;

use glam::{Vec2, Vec3};
use spectre_core::{EntityView, FrameOutcome, MonsterHandle, SpectrePlugin};
use spectre_types::AppConfig;

use crate::camera::ScreenCamera;
use crate::canvas::SoftwareCanvas;
use crate::error::OverlayError;
use crate::world::{SimulatedWorld, monster};

/// Screen pixels per world unit used by the demo camera
pub const DEMO_PIXELS_PER_UNIT: f32 = 0.5;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

pub struct Session {
    pub plugin: SpectrePlugin,
    pub world: SimulatedWorld,
    pub canvas: SoftwareCanvas,
}

impl Session {
    pub fn new(
        config: AppConfig,
        body_list: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Result<Self, OverlayError> {
        let canvas = SoftwareCanvas::new(width, height)?;
        let camera = ScreenCamera::new(
            Vec3::ZERO,
            Vec2::new(width as f32, height as f32),
            DEMO_PIXELS_PER_UNIT,
        );
        Ok(Self {
            plugin: SpectrePlugin::new(config, body_list),
            world: SimulatedWorld::new(camera),
            canvas,
        })
    }

    pub fn start(&mut self) -> bool {
        self.plugin.initialise(&mut self.world)
    }

    pub fn spawn(&mut self, entity: EntityView) {
        if let Some(entity) = self.world.spawn(entity) {
            self.plugin.entity_added(&entity);
        }
    }

    pub fn despawn(&mut self, handle: MonsterHandle) {
        if let Some(entity) = self.world.despawn(handle) {
            self.plugin.entity_removed(&entity);
        }
    }

    pub fn change_area(&mut self) {
        self.world.change_area();
        self.plugin.area_changed();
    }

    /// Render one frame onto a freshly cleared canvas
    pub fn frame(&mut self, now: Instant) -> FrameOutcome {
        self.canvas.clear(TRANSPARENT);
        let outcome = self.plugin.render(&self.world, &mut self.canvas, now);
        tracing::debug!(?outcome, "Frame rendered");
        outcome
    }
}

/// Scatter a few monsters around the origin: bodies on the default list,
/// one still alive, one out of range and one not on the list.
pub fn populate(session: &mut Session) {
    let roster = [
        (
            0x1000,
            "Metadata/Monsters/WickerMan/WickerMan",
            "Wicker Man",
            Vec3::new(-200.0, 150.0, 0.0),
            0,
        ),
        (
            0x2000,
            "Metadata/Monsters/Miner/MinerLantern",
            "Miner",
            Vec3::new(250.0, 80.0, 0.0),
            0,
        ),
        (
            0x3000,
            "Metadata/Monsters/KaomWarrior/KaomWarrior7",
            "Kaom's Chosen",
            Vec3::new(0.0, -300.0, 0.0),
            0,
        ),
        (
            0x4000,
            "Metadata/Monsters/Cannibal/CannibalMaleChampion",
            "Cannibal",
            Vec3::new(100.0, 200.0, 0.0),
            350,
        ),
        (
            0x5000,
            "Metadata/Monsters/WickerMan/WickerMan",
            "Far Wicker Man",
            Vec3::new(900.0, 900.0, 0.0),
            0,
        ),
        (
            0x6000,
            "Metadata/Monsters/Zombie/ZombieMiner",
            "Zombie",
            Vec3::new(-100.0, -100.0, 0.0),
            0,
        ),
    ];

    for (address, metadata, name, position, hp) in roster {
        session.spawn(monster(address, metadata, name, position, hp));
    }
}
