//! Rotation planes in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. There are six
//! coordinate planes: XY, XZ, XW, YZ, YW, ZW. The declaration order here is
//! also the fixed order in which the rotation engine composes per-plane
//! rotation matrices.

use serde::{Deserialize, Serialize};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - the familiar 2D rotation
    XY,
    /// XZ plane
    XZ,
    /// XW plane - 4D-specific, mixes x with the w axis
    XW,
    /// YZ plane
    YZ,
    /// YW plane - 4D-specific, mixes y with the w axis
    YW,
    /// ZW plane - 4D-specific, mixes z with the w axis
    ZW,
}

impl RotationPlane {
    /// All planes, in fixed composition order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axis indices spanning this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Position of this plane in [`RotationPlane::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Display label, e.g. for the debug overlay
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}
