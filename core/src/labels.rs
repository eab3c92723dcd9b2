//! Label layout and drawing
//!
//! Projects each body into screen space and draws its name on a background
//! box. Projection and drawing belong to the host; this module only decides
//! where things go.

use glam::{Vec2, Vec3};

use crate::entity::EntityView;
use crate::filter::{FrameContext, display_name};
use crate::host::{Camera, Graphics, ScreenRect, TextAlign};

/// Horizontal padding on each side of the label text
pub const LABEL_MARGIN: f32 = 3.0;

/// Background box for text drawn centered at `anchor` with the given extent.
/// The box spans the text's vertical extent starting at the anchor, padded
/// horizontally by `LABEL_MARGIN` on each side.
pub fn label_background(anchor: Vec2, text_size: Vec2) -> ScreenRect {
    ScreenRect::new(
        anchor.x - text_size.x / 2.0 - LABEL_MARGIN,
        anchor.y,
        text_size.x + LABEL_MARGIN * 2.0,
        text_size.y,
    )
}

/// Draws labels for entities that already passed the filter
pub struct LabelRenderer<'a, C: Camera, G: Graphics> {
    camera: &'a C,
    graphics: &'a mut G,
}

impl<'a, C: Camera, G: Graphics> LabelRenderer<'a, C, G> {
    pub fn new(camera: &'a C, graphics: &'a mut G) -> Self {
        Self { camera, graphics }
    }

    /// Draw one label. Returns false when the body is not on screen.
    pub fn draw_label(&mut self, entity: &EntityView, ctx: &FrameContext) -> bool {
        let world = entity.position + Vec3::new(0.0, 0.0, ctx.label_offset);
        let Some(anchor) = self.camera.world_to_screen(world) else {
            return false;
        };

        let name = display_name(Some(entity), ctx.prefer_render_name);
        let extent = self.graphics.measure_text(&name, ctx.text_size);

        self.graphics
            .draw_box(label_background(anchor, extent), ctx.background_color);
        self.graphics
            .draw_text(&name, anchor, ctx.text_color, ctx.text_size, TextAlign::Center);
        true
    }

    /// Draw every entity in order. Returns the number of labels drawn.
    pub fn draw_all<'e>(
        &mut self,
        entities: impl IntoIterator<Item = &'e EntityView>,
        ctx: &FrameContext,
    ) -> usize {
        entities
            .into_iter()
            .filter(|entity| self.draw_label(entity, ctx))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use spectre_types::AppConfig;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Text { text: String, at: Vec2 },
        Box(ScreenRect),
    }

    /// Records calls; every glyph is 8x16
    #[derive(Default)]
    struct RecordingGraphics {
        calls: Vec<Call>,
    }

    impl Graphics for RecordingGraphics {
        fn measure_text(&mut self, text: &str, _size: f32) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * 8.0, 16.0)
        }

        fn draw_text(
            &mut self,
            text: &str,
            position: Vec2,
            _color: spectre_types::Color,
            size: f32,
            _align: TextAlign,
        ) -> Vec2 {
            self.calls.push(Call::Text {
                text: text.to_string(),
                at: position,
            });
            self.measure_text(text, size)
        }

        fn draw_box(&mut self, rect: ScreenRect, _color: spectre_types::Color) {
            self.calls.push(Call::Box(rect));
        }
    }

    /// Maps world x/y straight to screen; anything with x < 0 is off-screen
    struct FlatCamera;

    impl Camera for FlatCamera {
        fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
            (world.x >= 0.0).then(|| Vec2::new(world.x, world.y - world.z))
        }
    }

    fn body(x: f32, y: f32, name: &str) -> EntityView {
        EntityView {
            kind: EntityKind::Monster,
            address: 1,
            metadata: format!("Metadata/Monsters/{name}"),
            render_name: Some(name.to_string()),
            is_valid: true,
            is_hostile: true,
            position: Vec3::new(x, y, 0.0),
            life: None,
        }
    }

    fn ctx() -> FrameContext {
        FrameContext::new(&AppConfig::default(), Vec3::ZERO)
    }

    #[test]
    fn test_background_geometry() {
        let rect = label_background(Vec2::new(100.0, 50.0), Vec2::new(40.0, 16.0));
        assert_eq!(rect, ScreenRect::new(77.0, 50.0, 46.0, 16.0));
    }

    #[test]
    fn test_label_offset_applied_before_projection() {
        let mut graphics = RecordingGraphics::default();
        let mut renderer = LabelRenderer::new(&FlatCamera, &mut graphics);

        assert!(renderer.draw_label(&body(300.0, 400.0, "Husk"), &ctx()));

        // default offset is 120 world units up
        assert_eq!(
            graphics.calls,
            vec![
                Call::Box(ScreenRect::new(281.0, 280.0, 38.0, 16.0)),
                Call::Text {
                    text: "Husk".to_string(),
                    at: Vec2::new(300.0, 280.0),
                },
            ]
        );
    }

    #[test]
    fn test_offscreen_bodies_skipped() {
        let mut graphics = RecordingGraphics::default();
        let mut renderer = LabelRenderer::new(&FlatCamera, &mut graphics);

        let bodies = [
            body(-5.0, 0.0, "Behind"),
            body(10.0, 500.0, "Visible"),
            body(-1.0, 0.0, "Left"),
        ];
        assert_eq!(renderer.draw_all(&bodies, &ctx()), 1);
        assert_eq!(graphics.calls.len(), 2);
    }

    #[test]
    fn test_projected_origin_is_a_real_point() {
        let mut graphics = RecordingGraphics::default();
        let mut renderer = LabelRenderer::new(&FlatCamera, &mut graphics);

        let mut ctx = ctx();
        ctx.label_offset = 0.0;
        assert!(renderer.draw_label(&body(0.0, 0.0, "Origin"), &ctx));
    }
}
