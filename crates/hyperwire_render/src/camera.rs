//! 4D camera and the two-stage dimensional-reduction projection
//!
//! The camera reduces 4D points to the 2D screen in two perspective
//! divides: 4D -> 3D parameterized by `viewer_distance` (dividing out w
//! relative to the camera), then 3D -> 2D parameterized by
//! `screen_distance` (dividing out z), followed by scaling into pixel
//! coordinates with the y axis inverted for top-left-origin rasters.

use hyperwire_math::{Vec2, Vec3, Vec4};

/// Floor for both projection distances; adjustments clamp here instead of
/// letting the projection degenerate.
const MIN_DISTANCE: f32 = 0.1;

/// 4D viewpoint plus projection and screen-mapping parameters
///
/// Collaborators mutate the camera through the narrow operations below,
/// never through its fields.
#[derive(Clone, Copy, Debug)]
pub struct Camera4D {
    position: Vec4,
    viewer_distance: f32,
    screen_distance: f32,
    screen_center: Vec2,
    scale: Vec2,
}

impl Default for Camera4D {
    fn default() -> Self {
        Self::new(5.0, 5.0)
    }
}

impl Camera4D {
    /// Create a camera at the default position, sitting back on the w axis
    pub fn new(viewer_distance: f32, screen_distance: f32) -> Self {
        Self {
            position: Vec4::new(0.0, 0.0, 0.0, -5.0),
            viewer_distance: viewer_distance.max(MIN_DISTANCE),
            screen_distance: screen_distance.max(MIN_DISTANCE),
            screen_center: Vec2::ZERO,
            scale: Vec2::new(100.0, 100.0),
        }
    }

    /// Create a camera at an explicit 4D position
    pub fn with_position(mut self, position: Vec4) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    #[inline]
    pub fn viewer_distance(&self) -> f32 {
        self.viewer_distance
    }

    #[inline]
    pub fn screen_distance(&self) -> f32 {
        self.screen_distance
    }

    #[inline]
    pub fn screen_center(&self) -> Vec2 {
        self.screen_center
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Project a 4D point into 3D, relative to the camera position
    ///
    /// A point at the camera's w-plane projects to the zero vector rather
    /// than dividing by near-zero (documented lossy fallback).
    pub fn project_to_3d(&self, point: Vec4) -> Vec3 {
        (point - self.position).project_to_3d(self.viewer_distance)
    }

    /// Project a 3D point to screen-space pixels
    ///
    /// Perspective-divides on z, then maps into pixels about the screen
    /// center. The y axis is inverted to match top-left-origin rasters.
    pub fn project_to_2d(&self, point: Vec3) -> Vec2 {
        let projected = point.project_to_2d(self.screen_distance);
        Vec2::new(
            self.screen_center.x + projected.x * self.scale.x,
            self.screen_center.y - projected.y * self.scale.y,
        )
    }

    /// Full 4D -> 2D reduction
    pub fn project(&self, point: Vec4) -> Vec2 {
        self.project_to_2d(self.project_to_3d(point))
    }

    /// Move the camera by a 4D offset
    pub fn move_by(&mut self, offset: Vec4) {
        self.position += offset;
    }

    /// Recompute screen center and scale from surface dimensions
    ///
    /// The scale maps roughly a 4-unit span onto the smaller screen axis;
    /// `zoom` stretches that linearly.
    pub fn set_screen_parameters(&mut self, width: u32, height: u32, zoom: f32) {
        self.screen_center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        let unit = zoom * width.min(height) as f32 / 4.0;
        self.scale = Vec2::new(unit, unit);
    }

    /// Nudge the 4D -> 3D projection distance, clamped to the floor
    pub fn adjust_viewer_distance(&mut self, delta: f32) {
        self.viewer_distance = (self.viewer_distance + delta).max(MIN_DISTANCE);
    }

    /// Nudge the 3D -> 2D projection distance, clamped to the floor
    pub fn adjust_screen_distance(&mut self, delta: f32) {
        self.screen_distance = (self.screen_distance + delta).max(MIN_DISTANCE);
    }
}
