//! Demo host for the spectre-body plugin
//!
//! Replays a short scripted session against the plugin and writes the first
//! labelled frame to a PNG (first argument, default `spectre-bodies.png`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use spectre_core::context::plugin_directory;
use spectre_core::{AppConfig, AppConfigExt, MonsterHandle};
use spectre_overlay::{Session, logging, populate};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn main() {
    let _log_guard = logging::init(&plugin_directory());

    let snapshot = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spectre-bodies.png"));

    let config = AppConfig::load();
    let reload_key = config.hotkeys.reload_list.clone();
    let body_list = config.body_list_path();

    let mut session = match Session::new(config, body_list, WIDTH, HEIGHT) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to create overlay: {}", e);
            return;
        }
    };

    if !session.start() {
        tracing::warn!("No spectre body list loaded, labels stay hidden until a reload");
    }
    populate(&mut session);

    let t0 = Instant::now();
    let outcome = session.frame(t0);
    tracing::info!(?outcome, "First frame");

    match session.canvas.save_png(&snapshot) {
        Ok(()) => tracing::info!(path = %snapshot.display(), "Snapshot saved"),
        Err(e) => tracing::error!(error = %e, "Failed to save snapshot"),
    }

    // Reload the list, then keep holding the key inside the debounce window
    session.world.press(&reload_key);
    let outcome = session.frame(t0 + Duration::from_millis(16));
    tracing::info!(?outcome, "Reload pressed");
    let outcome = session.frame(t0 + Duration::from_millis(32));
    tracing::info!(?outcome, "Reload held");
    session.world.release(&reload_key);

    // The cannibal dies and becomes a body
    if let Some(handle) = MonsterHandle::new(0x4000) {
        session.world.set_hp(handle, 0);
    }
    let outcome = session.frame(t0 + Duration::from_millis(48));
    tracing::info!(?outcome, "After kill");

    session.change_area();
    let outcome = session.frame(t0 + Duration::from_millis(64));
    tracing::info!(?outcome, "After area change");
}
