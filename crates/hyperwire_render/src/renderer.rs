//! Wireframe renderer
//!
//! Projects an object's working vertices through the camera and draws its
//! edges onto the drawing surface, plus a centroid marker and a name label.
//! The pentachoron additionally gets per-vertex markers and labels, since
//! five points are few enough to annotate individually.
//!
//! `render_scene` draws only the selected object.

use hyperwire_core::{pentachoron_vertex_color, Color, Object4D, Scene, ShapeKind};
use hyperwire_math::Vec2;

use crate::{Camera4D, DrawSurface};

/// Pixel offset of the name label above the centroid marker
const LABEL_RISE: f32 = 30.0;
const CENTROID_MARKER_SIZE: f32 = 5.0;
const VERTEX_MARKER_SIZE: f32 = 7.0;

/// Draws scenes and objects onto a [`DrawSurface`]
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    background: Color,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with a black background
    pub fn new() -> Self {
        Self {
            background: Color::BLACK,
        }
    }

    /// Override the background color
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Clear the surface and render the scene's selected object
    pub fn render_scene(
        &self,
        scene: &Scene,
        camera: &Camera4D,
        surface: &mut dyn DrawSurface,
    ) {
        surface.clear(self.background);
        if let Some(object) = scene.selected() {
            self.render_object(object, camera, surface);
        }
    }

    /// Render one object's wireframe, centroid marker, and label
    pub fn render_object(
        &self,
        object: &Object4D,
        camera: &Camera4D,
        surface: &mut dyn DrawSurface,
    ) {
        let projected: Vec<Vec2> = object
            .vertices()
            .iter()
            .map(|&v| camera.project(v))
            .collect();

        for edge in object.edges() {
            // An edge referencing a missing vertex is skipped, not an error
            if !edge.is_valid(projected.len()) {
                log::trace!(
                    "skipping edge ({}, {}) of {}: vertex out of range",
                    edge.start,
                    edge.end,
                    object.name()
                );
                continue;
            }
            surface.draw_line(projected[edge.start], projected[edge.end], edge.color);
        }

        if let ShapeKind::Pentachoron { .. } = object.kind() {
            self.render_vertex_markers(&projected, surface);
        }

        let center = camera.project(object.centroid());
        surface.draw_point(center, Color::MAGENTA, CENTROID_MARKER_SIZE);
        surface.draw_text(
            object.name(),
            Vec2::new(center.x, center.y - LABEL_RISE),
            Color::CYAN,
        );
    }

    /// Per-vertex markers and `V1`.. labels for the pentachoron
    fn render_vertex_markers(&self, projected: &[Vec2], surface: &mut dyn DrawSurface) {
        for (i, &position) in projected.iter().enumerate() {
            let color = pentachoron_vertex_color(i);
            surface.draw_point(position, color, VERTEX_MARKER_SIZE);
            surface.draw_text(
                &format!("V{}", i + 1),
                Vec2::new(position.x + 5.0, position.y - 5.0),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSurface;
    use hyperwire_core::Edge;

    fn test_camera() -> Camera4D {
        let mut camera = Camera4D::new(5.0, 5.0);
        camera.set_screen_parameters(800, 600, 1.0);
        camera
    }

    #[test]
    fn test_render_object_draws_every_edge() {
        let object = Object4D::new(ShapeKind::tesseract(1.0));
        let mut surface = RecordingSurface::new(800, 600);
        Renderer::new().render_object(&object, &test_camera(), &mut surface);

        assert_eq!(surface.lines().count(), object.edge_count());
        // Centroid marker and label come on top of the wireframe
        assert!(surface.texts().any(|t| t == "Tesseract"));
    }

    #[test]
    fn test_render_scene_draws_selected_only() {
        let scene = Scene::demo();
        let mut surface = RecordingSurface::new(800, 600);
        Renderer::new().render_scene(&scene, &test_camera(), &mut surface);

        assert_eq!(surface.clear_count(), 1);
        // Only the selected tesseract's label appears
        assert!(surface.texts().any(|t| t == "Tesseract"));
        assert!(!surface.texts().any(|t| t == "Hypersphere"));
        assert_eq!(
            surface.lines().count(),
            scene.selected().unwrap().edge_count()
        );
    }

    #[test]
    fn test_render_empty_scene_only_clears() {
        let scene = Scene::new();
        let mut surface = RecordingSurface::new(800, 600);
        Renderer::new().render_scene(&scene, &test_camera(), &mut surface);
        assert_eq!(surface.clear_count(), 1);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_pentachoron_gets_vertex_labels() {
        let object = Object4D::new(ShapeKind::pentachoron(1.0));
        let mut surface = RecordingSurface::new(800, 600);
        Renderer::new().render_object(&object, &test_camera(), &mut surface);

        for i in 1..=5 {
            let label = format!("V{}", i);
            assert!(surface.texts().any(|t| t == label));
        }
    }

    #[test]
    fn test_invalid_edge_is_skipped() {
        // Hand-build a degenerate situation through the public surface: a
        // renderer fed fewer projected vertices than an edge expects.
        let edge = Edge::new(0, 99);
        assert!(!edge.is_valid(16));

        // Rendering a well-formed object never hits the skip path
        let object = Object4D::new(ShapeKind::tesseract(1.0));
        assert!(object.edges().iter().all(|e| e.is_valid(object.vertex_count())));
    }
}
