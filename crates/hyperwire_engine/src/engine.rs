//! The frame-driving engine
//!
//! Owns the scene, the camera, the renderer, and the rotation state. One
//! logical tick is: advance rotation state by the caller-supplied elapsed
//! time, re-transform the selected object, then render one frame through
//! the drawing surface. Elapsed time is always an explicit argument, never
//! an ambient clock read, so ticks are deterministic and testable.

use hyperwire_core::Scene;
use hyperwire_math::RotationPlane;
use hyperwire_render::{Camera4D, DrawSurface, Renderer};

use crate::{Axis4, Command, Direction, RotationState};

/// Camera movement per move command
const CAMERA_STEP: f32 = 0.1;
/// Viewer-distance change per zoom command
const DISTANCE_STEP: f32 = 0.2;
/// Rotation-speed change per speed command
const SPEED_STEP: f32 = 0.005;

/// Owns the scene and animation state and drives frames
pub struct Engine {
    scene: Scene,
    camera: Camera4D,
    renderer: Renderer,
    rotation: RotationState,
    width: u32,
    height: u32,
    zoom: f32,
    show_overlay: bool,
}

impl Engine {
    /// Create an engine with an empty scene sized for the given surface
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera4D::default();
        camera.set_screen_parameters(width, height, 1.0);
        Self {
            scene: Scene::new(),
            camera,
            renderer: Renderer::new(),
            rotation: RotationState::new(),
            width,
            height,
            zoom: 1.0,
            show_overlay: true,
        }
    }

    /// Replace the scene
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Replace the camera (screen parameters are recomputed)
    pub fn with_camera(mut self, camera: Camera4D) -> Self {
        self.camera = camera;
        self.camera
            .set_screen_parameters(self.width, self.height, self.zoom);
        self
    }

    /// Replace the rotation state
    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replace the renderer
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the screen zoom factor
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self.camera
            .set_screen_parameters(self.width, self.height, zoom);
        self
    }

    /// Show or hide the debug overlay
    pub fn with_overlay(mut self, show: bool) -> Self {
        self.show_overlay = show;
        self
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    pub fn camera(&self) -> &Camera4D {
        &self.camera
    }

    #[inline]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Advance the animation by `dt` seconds and re-transform the selected
    /// object
    ///
    /// Under the default absolute policy the object is reset to its
    /// canonical pose and the freshly composed matrix applied against it;
    /// under the cumulative policy the matrix lands on top of the previous
    /// frame's pose and error compounds (the explicitly drift-prone mode).
    pub fn update(&mut self, dt: f32) {
        if !self.rotation.is_animating() {
            return;
        }
        let rotation = self.rotation.advance(dt);
        let reset_first = self.rotation.reset_each_frame();
        if let Some(object) = self.scene.selected_mut() {
            if reset_first {
                object.reset_transform();
                object.apply_transform(&rotation);
            } else {
                object.compound_transform(&rotation);
            }
        }
    }

    /// Apply one abstract input command
    ///
    /// Commands act on the press edge only; releases are ignored.
    pub fn process_command(&mut self, command: Command, pressed: bool) {
        if !pressed {
            return;
        }
        match command {
            Command::TogglePlane(plane) => self.rotation.toggle_plane(plane),
            Command::ToggleAnimation => self.rotation.toggle_animation(),
            Command::ToggleResetMode => {
                // Entering reset mode snaps everything back to canonical
                // immediately, discarding accumulated drift
                if self.rotation.toggle_reset_mode() {
                    for object in self.scene.objects_mut() {
                        object.reset_transform();
                    }
                }
            }
            Command::SpeedUp => self.rotation.adjust_speed(SPEED_STEP),
            Command::SpeedDown => self.rotation.adjust_speed(-SPEED_STEP),
            Command::MoveCamera(axis, direction) => {
                self.move_camera(axis, direction);
            }
            Command::ViewerDistanceIn => self.camera.adjust_viewer_distance(DISTANCE_STEP),
            Command::ViewerDistanceOut => self.camera.adjust_viewer_distance(-DISTANCE_STEP),
        }
    }

    /// Step the camera along an axis
    pub fn move_camera(&mut self, axis: Axis4, direction: Direction) {
        self.camera
            .move_by(axis.unit() * (direction.signum() * CAMERA_STEP));
    }

    /// Nudge the 3D -> 2D projection distance
    pub fn adjust_screen_distance(&mut self, delta: f32) {
        self.camera.adjust_screen_distance(delta);
    }

    /// Render one frame: the scene, then the debug overlay
    pub fn render_frame(&self, surface: &mut dyn DrawSurface) {
        self.renderer.render_scene(&self.scene, &self.camera, surface);
        if self.show_overlay {
            self.draw_overlay(surface);
        }
    }

    /// Recompute camera screen parameters and resize the surface
    ///
    /// The surface is expected to replace its backing raster, not mutate
    /// it in place.
    pub fn resize(&mut self, width: u32, height: u32, surface: &mut dyn DrawSurface) {
        self.width = width;
        self.height = height;
        self.camera.set_screen_parameters(width, height, self.zoom);
        surface.resize(width, height);
        log::debug!("resized to {}x{}", width, height);
    }

    fn draw_overlay(&self, surface: &mut dyn DrawSurface) {
        use hyperwire_core::Color;
        use hyperwire_math::Vec2;

        let mut active = String::from("Active Rotations:");
        for plane in RotationPlane::ALL {
            if self.rotation.is_active(plane) {
                active.push(' ');
                active.push_str(plane.label());
            }
        }

        let lines = [
            active,
            format!("Speed: {:.3}", self.rotation.speed()),
            format!(
                "Animation: {}",
                if self.rotation.is_animating() {
                    "Running"
                } else {
                    "Paused"
                }
            ),
            format!(
                "Mode: {}",
                if self.rotation.reset_each_frame() {
                    "Reset Each Frame"
                } else {
                    "Cumulative Rotations"
                }
            ),
            format!("Viewer Distance: {:.2}", self.camera.viewer_distance()),
            format!("Screen Distance: {:.2}", self.camera.screen_distance()),
            format!(
                "Camera Position: ({:.2}, {:.2}, {:.2}, {:.2})",
                self.camera.position().x,
                self.camera.position().y,
                self.camera.position().z,
                self.camera.position().w
            ),
        ];

        let mut y = 10.0;
        for line in &lines {
            surface.draw_text(line, Vec2::new(10.0, y), Color::YELLOW);
            y += 20.0;
        }

        if let Some(object) = self.scene.selected() {
            surface.draw_text(
                &format!(
                    "Object: {} ({} vertices, {} edges)",
                    object.name(),
                    object.vertex_count(),
                    object.edge_count()
                ),
                Vec2::new(10.0, y),
                Color::YELLOW,
            );
        }

        let bottom = self.height as f32;
        surface.draw_text(
            "Controls: 1-6 toggle rotations, space pause, T toggle reset mode",
            Vec2::new(10.0, bottom - 40.0),
            Color::LIGHT_GRAY,
        );
        surface.draw_text(
            "WASD/QE/RF move camera, +/- viewer distance, up/down speed",
            Vec2::new(10.0, bottom - 20.0),
            Color::LIGHT_GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_core::{Object4D, ShapeKind};
    use hyperwire_math::{Mat5, Vec4};
    use hyperwire_render::RecordingSurface;
    use std::f32::consts::FRAC_PI_2;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < 0.001
    }

    fn engine_with_tesseract() -> Engine {
        let mut scene = Scene::new();
        scene.add(Object4D::new(ShapeKind::tesseract(1.0)));
        Engine::new(800, 600).with_scene(scene)
    }

    #[test]
    fn test_absolute_policy_matches_direct_rotation() {
        let mut engine =
            engine_with_tesseract().with_rotation(RotationState::new().with_speed(FRAC_PI_2));

        // Two half-second ticks: accumulated XY angle is pi/2
        engine.update(0.5);
        engine.update(0.5);

        let mut expected = Object4D::new(ShapeKind::tesseract(1.0));
        expected.apply_transform(&Mat5::plane_rotation(RotationPlane::XY, FRAC_PI_2));

        let object = engine.scene().selected().unwrap();
        for (a, b) in object.vertices().iter().zip(expected.vertices()) {
            assert!(vec_approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_cumulative_policy_compounds() {
        let rotation = RotationState::new()
            .with_speed(FRAC_PI_2)
            .with_reset_each_frame(false);
        let mut engine = engine_with_tesseract().with_rotation(rotation);

        // Tick 1 applies pi/4; tick 2 applies a further pi/2 on top,
        // so the pose ends at 3pi/4 rather than the absolute pi/2.
        engine.update(0.5);
        engine.update(0.5);

        let mut expected = Object4D::new(ShapeKind::tesseract(1.0));
        expected.apply_transform(&Mat5::plane_rotation(
            RotationPlane::XY,
            FRAC_PI_2 * 1.5,
        ));

        let object = engine.scene().selected().unwrap();
        for (a, b) in object.vertices().iter().zip(expected.vertices()) {
            assert!(vec_approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_paused_engine_leaves_pose_alone() {
        let mut engine = engine_with_tesseract();
        engine.process_command(Command::ToggleAnimation, true);
        let before = engine.scene().selected().unwrap().vertices().to_vec();
        engine.update(1.0);
        assert_eq!(engine.scene().selected().unwrap().vertices(), before.as_slice());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut engine = engine_with_tesseract();
        let position = engine.camera().position();
        engine.process_command(Command::MoveCamera(Axis4::X, Direction::Positive), false);
        assert_eq!(engine.camera().position(), position);
    }

    #[test]
    fn test_move_camera_commands() {
        let mut engine = engine_with_tesseract();
        let start = engine.camera().position();
        engine.process_command(Command::MoveCamera(Axis4::W, Direction::Positive), true);
        engine.process_command(Command::MoveCamera(Axis4::X, Direction::Negative), true);
        let end = engine.camera().position();
        assert!((end.w - (start.w + 0.1)).abs() < 0.0001);
        assert!((end.x - (start.x - 0.1)).abs() < 0.0001);
    }

    #[test]
    fn test_viewer_distance_commands_clamp() {
        let mut engine = engine_with_tesseract();
        for _ in 0..100 {
            engine.process_command(Command::ViewerDistanceOut, true);
        }
        assert_eq!(engine.camera().viewer_distance(), 0.1);
        engine.process_command(Command::ViewerDistanceIn, true);
        assert!((engine.camera().viewer_distance() - 0.3).abs() < 0.0001);
    }

    #[test]
    fn test_entering_reset_mode_snaps_to_canonical() {
        let rotation = RotationState::new()
            .with_speed(1.0)
            .with_reset_each_frame(false);
        let mut engine = engine_with_tesseract().with_rotation(rotation);
        engine.update(0.7);

        let canonical = engine
            .scene()
            .selected()
            .unwrap()
            .canonical_vertices()
            .to_vec();
        assert_ne!(
            engine.scene().selected().unwrap().vertices(),
            canonical.as_slice()
        );

        engine.process_command(Command::ToggleResetMode, true);
        assert_eq!(
            engine.scene().selected().unwrap().vertices(),
            canonical.as_slice()
        );
    }

    #[test]
    fn test_render_frame_draws_scene_and_overlay() {
        let mut engine = engine_with_tesseract();
        engine.update(0.016);
        let mut surface = RecordingSurface::new(800, 600);
        engine.render_frame(&mut surface);

        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.lines().count(), 32);
        assert!(surface.texts().any(|t| t.starts_with("Active Rotations:")));
        assert!(surface.texts().any(|t| t.starts_with("Mode: Reset Each Frame")));
        assert!(surface.texts().any(|t| t.contains("16 vertices, 32 edges")));
    }

    #[test]
    fn test_overlay_can_be_disabled() {
        let engine = engine_with_tesseract().with_overlay(false);
        let mut surface = RecordingSurface::new(800, 600);
        engine.render_frame(&mut surface);
        // Only the object label remains
        assert!(surface.texts().all(|t| t == "Tesseract"));
    }

    #[test]
    fn test_resize_updates_camera_and_surface() {
        let mut engine = engine_with_tesseract();
        let mut surface = RecordingSurface::new(800, 600);
        engine.resize(1024, 768, &mut surface);
        assert_eq!(surface.width(), 1024);
        assert_eq!(
            engine.camera().screen_center(),
            hyperwire_math::Vec2::new(512.0, 384.0)
        );
    }

    #[test]
    fn test_toggle_plane_command_changes_composition() {
        let mut engine = engine_with_tesseract();
        engine.process_command(Command::TogglePlane(RotationPlane::ZW), true);
        assert!(engine.rotation().is_active(RotationPlane::ZW));
        assert!(engine.rotation().is_active(RotationPlane::XY));
    }

    #[test]
    fn test_speed_commands() {
        let mut engine = engine_with_tesseract();
        engine.process_command(Command::SpeedUp, true);
        assert!((engine.rotation().speed() - 0.025).abs() < 0.0001);
        for _ in 0..20 {
            engine.process_command(Command::SpeedDown, true);
        }
        assert_eq!(engine.rotation().speed(), 0.001);
    }
}
