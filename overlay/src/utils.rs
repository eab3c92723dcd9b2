//! Small conversions shared by the canvas and the demo host

use glam::Vec2;
use tiny_skia::Color;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// True when `point` lies inside a `width` x `height` viewport
#[inline]
pub fn within_viewport(point: Vec2, width: f32, height: f32) -> bool {
    point.x >= 0.0 && point.y >= 0.0 && point.x < width && point.y < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgba() {
        let c = color_from_rgba([255, 0, 0, 255]);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_within_viewport() {
        assert!(within_viewport(Vec2::new(0.0, 0.0), 100.0, 50.0));
        assert!(within_viewport(Vec2::new(99.5, 49.5), 100.0, 50.0));
        assert!(!within_viewport(Vec2::new(100.0, 10.0), 100.0, 50.0));
        assert!(!within_viewport(Vec2::new(-0.1, 10.0), 100.0, 50.0));
        assert!(!within_viewport(Vec2::new(f32::NAN, 10.0), 100.0, 50.0));
    }
}
