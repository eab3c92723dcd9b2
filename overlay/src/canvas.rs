//! CPU canvas implementing the plugin's drawing interface
//!
//! Labels land in an RGBA pixmap that can be inspected or written out as a
//! PNG snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use glam::Vec2;
use spectre_core::{Graphics, ScreenRect, TextAlign};
use spectre_types::Color;
use tiny_skia::Pixmap;

use crate::error::OverlayError;
use crate::renderer::Renderer;
use crate::utils::color_from_rgba;

pub struct SoftwareCanvas {
    pixmap: Pixmap,
    renderer: Renderer,
    boxes_drawn: usize,
    texts_drawn: usize,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, OverlayError> {
        let pixmap = Pixmap::new(width, height).ok_or(OverlayError::Canvas { width, height })?;
        Ok(Self {
            pixmap,
            renderer: Renderer::new(),
            boxes_drawn: 0,
            texts_drawn: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Wipe the canvas and reset the draw counters
    pub fn clear(&mut self, color: Color) {
        self.renderer
            .clear(&mut self.pixmap.as_mut(), color_from_rgba(color));
        self.boxes_drawn = 0;
        self.texts_drawn = 0;
    }

    /// Un-premultiplied RGBA at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // Pixmap::pixel only bounds-checks the flat index, so x past the
        // right edge would wrap onto the next row
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// (boxes, texts) drawn since the last clear
    pub fn draw_counts(&self) -> (usize, usize) {
        (self.boxes_drawn, self.texts_drawn)
    }

    /// Write the canvas as an 8-bit RGBA PNG
    pub fn save_png(&self, path: &Path) -> Result<(), OverlayError> {
        let io_err = |source| OverlayError::Io {
            path: path.to_path_buf(),
            source,
        };
        let encode_err = |source| OverlayError::Encode {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = File::create(path).map_err(io_err)?;

        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(encode_err)?;

        let rgba: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        writer.write_image_data(&rgba).map_err(encode_err)?;
        writer.finish().map_err(encode_err)?;

        tracing::debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}

impl Graphics for SoftwareCanvas {
    fn measure_text(&mut self, text: &str, size: f32) -> Vec2 {
        let (w, h) = self.renderer.measure_text(text, size);
        Vec2::new(w, h)
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        color: Color,
        size: f32,
        align: TextAlign,
    ) -> Vec2 {
        let extent = self.measure_text(text, size);
        let x = match align {
            TextAlign::Left => position.x,
            TextAlign::Center => position.x - extent.x / 2.0,
            TextAlign::Right => position.x - extent.x,
        };
        self.renderer.draw_text(
            &mut self.pixmap.as_mut(),
            text,
            x,
            position.y,
            size,
            color_from_rgba(color),
        );
        self.texts_drawn += 1;
        extent
    }

    fn draw_box(&mut self, rect: ScreenRect, color: Color) {
        self.renderer.fill_rect(
            &mut self.pixmap.as_mut(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            color_from_rgba(color),
        );
        self.boxes_drawn += 1;
    }
}
