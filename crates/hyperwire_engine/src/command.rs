//! Abstract input commands
//!
//! The engine consumes a closed set of semantic commands with a pressed
//! state. Mapping a concrete input device's key codes onto this set is the
//! windowing collaborator's responsibility, keeping device details out of
//! the core.

use hyperwire_math::{RotationPlane, Vec4};

/// One of the four coordinate axes of 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis4 {
    X,
    Y,
    Z,
    W,
}

impl Axis4 {
    /// Unit vector along this axis
    #[inline]
    pub const fn unit(self) -> Vec4 {
        match self {
            Axis4::X => Vec4::X,
            Axis4::Y => Vec4::Y,
            Axis4::Z => Vec4::Z,
            Axis4::W => Vec4::W,
        }
    }
}

/// Direction of movement along an axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// +1.0 or -1.0
    #[inline]
    pub const fn signum(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// The closed set of abstract commands the engine accepts
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Toggle one rotation plane's animation on or off
    TogglePlane(RotationPlane),
    /// Pause or resume the animation as a whole
    ToggleAnimation,
    /// Switch between absolute (reset-each-frame) and cumulative rotation
    ToggleResetMode,
    /// Raise the rotation speed by one step
    SpeedUp,
    /// Lower the rotation speed by one step (clamped above zero)
    SpeedDown,
    /// Move the camera one step along an axis
    MoveCamera(Axis4, Direction),
    /// Pull the 4D viewpoint closer (raise the viewer distance)
    ViewerDistanceIn,
    /// Push the 4D viewpoint away (lower the viewer distance)
    ViewerDistanceOut,
}
