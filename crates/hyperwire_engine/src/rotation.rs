//! The six-plane rotation state machine
//!
//! Per frame, each active plane's angle advances by `speed * dt`, and the
//! angles are baked into a single matrix as the ordered product of the
//! active planes' rotations. The order is fixed (XY, XZ, XW, YZ, YW, ZW);
//! plane rotations in 4D do not commute, so a stable order keeps the
//! composed pose deterministic no matter when planes were toggled.
//!
//! Two application policies exist (see the engine): absolute angles with a
//! reset to the canonical pose each frame, or cumulative application on top
//! of the previous frame's pose. Absolute is the default; cumulative
//! compounds floating error and apparent speed and is kept only as an
//! explicit mode.

use bitflags::bitflags;

use hyperwire_math::{Mat5, RotationPlane};

/// Rotation speed floor; speed adjustments clamp here
const MIN_SPEED: f32 = 0.001;

bitflags! {
    /// Set of rotation planes currently animating
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PlaneSet: u8 {
        const XY = 1 << 0;
        const XZ = 1 << 1;
        const XW = 1 << 2;
        const YZ = 1 << 3;
        const YW = 1 << 4;
        const ZW = 1 << 5;
    }
}

impl PlaneSet {
    /// The flag bit for a single plane
    pub fn from_plane(plane: RotationPlane) -> Self {
        PlaneSet::from_bits_truncate(1 << plane.index())
    }

    /// Whether a plane is in the set
    pub fn contains_plane(&self, plane: RotationPlane) -> bool {
        self.contains(Self::from_plane(plane))
    }
}

/// Angles, active planes, speed, and policy flags for the animation
#[derive(Clone, Copy, Debug)]
pub struct RotationState {
    /// One accumulated angle per plane, indexed by [`RotationPlane::index`]
    angles: [f32; 6],
    active: PlaneSet,
    speed: f32,
    animating: bool,
    reset_each_frame: bool,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    /// Default state: XY spinning, modest speed, absolute-angle policy
    pub fn new() -> Self {
        Self {
            angles: [0.0; 6],
            active: PlaneSet::XY,
            speed: 0.02,
            animating: true,
            reset_each_frame: true,
        }
    }

    /// Override the active plane set
    pub fn with_active(mut self, active: PlaneSet) -> Self {
        self.active = active;
        self
    }

    /// Override the rotation speed (clamped to the floor)
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(MIN_SPEED);
        self
    }

    /// Override the reset-each-frame policy
    pub fn with_reset_each_frame(mut self, reset: bool) -> Self {
        self.reset_each_frame = reset;
        self
    }

    /// Override whether the animation starts running
    pub fn with_animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    pub fn reset_each_frame(&self) -> bool {
        self.reset_each_frame
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn active(&self) -> PlaneSet {
        self.active
    }

    #[inline]
    pub fn is_active(&self, plane: RotationPlane) -> bool {
        self.active.contains_plane(plane)
    }

    /// Accumulated angle of one plane
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        self.angles[plane.index()]
    }

    /// Toggle one plane's animation
    pub fn toggle_plane(&mut self, plane: RotationPlane) {
        self.active.toggle(PlaneSet::from_plane(plane));
        log::debug!(
            "rotation plane {} {}",
            plane.label(),
            if self.is_active(plane) { "on" } else { "off" }
        );
    }

    /// Pause or resume the animation
    pub fn toggle_animation(&mut self) {
        self.animating = !self.animating;
    }

    /// Flip between the absolute and cumulative policies, returning the
    /// new value of `reset_each_frame`
    pub fn toggle_reset_mode(&mut self) -> bool {
        self.reset_each_frame = !self.reset_each_frame;
        log::debug!(
            "rotation policy: {}",
            if self.reset_each_frame {
                "reset each frame"
            } else {
                "cumulative"
            }
        );
        self.reset_each_frame
    }

    /// Adjust the rotation speed, clamped to the positive floor
    pub fn adjust_speed(&mut self, delta: f32) {
        self.speed = (self.speed + delta).max(MIN_SPEED);
    }

    /// Advance every active plane's angle by `speed * dt` and compose the
    /// frame's rotation matrix
    ///
    /// The product runs over the planes in their fixed declaration order;
    /// inactive planes contribute nothing (their angles also stay frozen).
    pub fn advance(&mut self, dt: f32) -> Mat5 {
        let mut rotation = Mat5::IDENTITY;
        for plane in RotationPlane::ALL {
            if !self.is_active(plane) {
                continue;
            }
            self.angles[plane.index()] += self.speed * dt;
            rotation = rotation * Mat5::plane_rotation(plane, self.angles[plane.index()]);
        }
        rotation
    }

    /// The composed matrix for the current angles without advancing time
    pub fn current_matrix(&self) -> Mat5 {
        let mut rotation = Mat5::IDENTITY;
        for plane in RotationPlane::ALL {
            if self.is_active(plane) {
                rotation = rotation * Mat5::plane_rotation(plane, self.angles[plane.index()]);
            }
        }
        rotation
    }
}
