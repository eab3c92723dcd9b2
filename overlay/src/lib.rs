//! Spectre Overlay Library
//!
//! A software host for the spectre-body plugin: CPU rendering of labels and
//! a scripted world that answers the plugin's host queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    session                          │
//! │       plugin + world + canvas, one call per frame   │
//! ├──────────────────────────┬──────────────────────────┤
//! │          world           │         canvas           │
//! │  entities, player, keys  │  Graphics over a pixmap  │
//! │  camera (projection)     │  PNG snapshots           │
//! ├──────────────────────────┴──────────────────────────┤
//! │                    renderer                          │
//! │            tiny-skia + cosmic-text                   │
//! │              (drawing primitives)                    │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod camera;
pub mod canvas;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use camera::ScreenCamera;
pub use canvas::SoftwareCanvas;
pub use error::OverlayError;
pub use renderer::Renderer;
pub use session::{Session, populate};
pub use world::{SimulatedWorld, monster};
