//! Software renderer using tiny-skia and cosmic-text
//!
//! Draws into a caller-owned `PixmapMut`. Shaped text is cached so labels
//! that repeat every frame are only laid out once.
use std::collections::HashMap;

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, LayoutGlyph, Metrics, Shaping,
    SwashCache,
};
use tiny_skia::{Color, Paint, PixmapMut, Rect, Transform};

/// Maximum entries in the text shaping cache (LRU eviction when exceeded)
const TEXT_CACHE_MAX_ENTRIES: usize = 512;

/// Line height relative to font size
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Cached result of text shaping
struct ShapedText {
    glyphs: Vec<LayoutGlyph>,
    width: f32,
    height: f32,
    /// Distance from the top of the line box to the first baseline
    ascent: f32,
    last_used: u64,
}

/// Key for text cache: (text content, font size in tenths)
type TextCacheKey = (String, u32);

fn size_key(font_size: f32) -> u32 {
    (font_size * 10.0).round() as u32
}

pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    text_cache: HashMap<TextCacheKey, ShapedText>,
    cache_access_counter: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            text_cache: HashMap::with_capacity(64),
            cache_access_counter: 0,
        }
    }

    /// Number of shaped strings currently cached
    pub fn cached_entries(&self) -> usize {
        self.text_cache.len()
    }

    fn evict_lru_if_needed(&mut self) {
        if self.text_cache.len() <= TEXT_CACHE_MAX_ENTRIES {
            return;
        }

        // Drop the oldest quarter
        let target_size = TEXT_CACHE_MAX_ENTRIES * 3 / 4;
        let mut entries: Vec<_> = self
            .text_cache
            .iter()
            .map(|(k, v)| (k.clone(), v.last_used))
            .collect();
        entries.sort_by_key(|(_, last_used)| *last_used);

        let excess = self.text_cache.len() - target_size;
        for (key, _) in entries.into_iter().take(excess) {
            self.text_cache.remove(&key);
        }
    }

    fn find_cached(&mut self, text: &str, key: u32) -> Option<&mut ShapedText> {
        // Label sets are small; a scan beats allocating a lookup key
        self.text_cache
            .iter_mut()
            .find(|(k, _)| k.0 == text && k.1 == key)
            .map(|(_, v)| v)
    }

    /// Shape `text` if it isn't cached yet and bump its LRU stamp.
    /// Returns (width, height, ascent).
    fn ensure_shaped(&mut self, text: &str, font_size: f32) -> (f32, f32, f32) {
        let key = size_key(font_size);
        self.cache_access_counter += 1;
        let access = self.cache_access_counter;

        if let Some(cached) = self.find_cached(text, key) {
            cached.last_used = access;
            return (cached.width, cached.height, cached.ascent);
        }

        let shaped = self.shape(text, font_size, access);
        let extent = (shaped.width, shaped.height, shaped.ascent);
        self.text_cache.insert((text.to_string(), key), shaped);
        self.evict_lru_if_needed();
        extent
    }

    fn shape(&mut self, text: &str, font_size: f32, access: u64) -> ShapedText {
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        let mut ascent = None;

        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
            ascent.get_or_insert(run.line_y - run.line_top);
            glyphs.extend(run.glyphs.iter().cloned());
        }

        ShapedText {
            glyphs,
            width,
            height: height.max(metrics.line_height),
            ascent: ascent.unwrap_or(font_size),
            last_used: access,
        }
    }

    /// Fill the whole pixmap with a color
    pub fn clear(&self, pixmap: &mut PixmapMut, color: Color) {
        pixmap.fill(color);
    }

    /// Draw a filled rectangle. Degenerate rectangles are ignored.
    pub fn fill_rect(&self, pixmap: &mut PixmapMut, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;

        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Draw text with the top of its line box at `y`
    pub fn draw_text(
        &mut self,
        pixmap: &mut PixmapMut,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    ) {
        let (_, _, ascent) = self.ensure_shaped(text, font_size);
        let baseline = y + ascent;
        // swash_cache needs &mut self below
        let glyphs = self
            .find_cached(text, size_key(font_size))
            .map(|c| c.glyphs.clone())
            .unwrap_or_default();

        let text_color = CosmicColor::rgba(
            (color.red() * 255.0) as u8,
            (color.green() * 255.0) as u8,
            (color.blue() * 255.0) as u8,
            (color.alpha() * 255.0) as u8,
        );

        for glyph in &glyphs {
            let physical = glyph.physical((x, baseline), 1.0);

            if let Some(image) = self
                .swash_cache
                .get_image(&mut self.font_system, physical.cache_key)
            {
                draw_glyph_to_pixmap(
                    pixmap,
                    &image.data,
                    image.placement.width,
                    image.placement.height,
                    physical.x + image.placement.left,
                    physical.y - image.placement.top,
                    text_color,
                );
            }
        }
    }

    /// Measured (width, height) of the text
    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        let (width, height, _) = self.ensure_shaped(text, font_size);
        (width, height)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Alpha-blend a coverage mask onto a premultiplied pixmap
fn draw_glyph_to_pixmap(
    pixmap: &mut PixmapMut,
    glyph_data: &[u8],
    glyph_width: u32,
    glyph_height: u32,
    dest_x: i32,
    dest_y: i32,
    color: CosmicColor,
) {
    let pixmap_width = pixmap.width() as i32;
    let pixmap_height = pixmap.height() as i32;
    let data = pixmap.data_mut();

    for gy in 0..glyph_height as i32 {
        let py = dest_y + gy;
        if py < 0 || py >= pixmap_height {
            continue;
        }

        for gx in 0..glyph_width as i32 {
            let px = dest_x + gx;
            if px < 0 || px >= pixmap_width {
                continue;
            }

            let glyph_idx = (gy as u32 * glyph_width + gx as u32) as usize;
            let Some(&coverage) = glyph_data.get(glyph_idx) else {
                continue;
            };
            if coverage == 0 {
                continue;
            }

            let pixel_idx = ((py * pixmap_width + px) * 4) as usize;
            if pixel_idx + 3 >= data.len() {
                continue;
            }

            let src_a = (coverage as u32 * color.a() as u32) / 255;
            let inv_a = 255 - src_a;

            data[pixel_idx] =
                ((color.r() as u32 * src_a + data[pixel_idx] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 1] =
                ((color.g() as u32 * src_a + data[pixel_idx + 1] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 2] =
                ((color.b() as u32 * src_a + data[pixel_idx + 2] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 3] = (src_a + (data[pixel_idx + 3] as u32 * inv_a) / 255) as u8;
        }
    }
}
