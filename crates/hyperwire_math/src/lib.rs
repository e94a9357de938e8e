//! 4D mathematics for the Hyperwire viewer
//!
//! This crate provides the vector and matrix types behind the
//! geometry-and-projection pipeline.
//!
//! ## Core types
//!
//! - [`Vec4`] / [`Vec3`] / [`Vec2`] - value-type vectors, with the
//!   dimensional-reduction projections `Vec4 -> Vec3 -> Vec2`
//! - [`Mat5`] - 5x5 homogeneous matrix over 4D points (rotation in any
//!   coordinate plane, translation, scaling)
//! - [`RotationPlane`] - the six rotation planes of 4D space

mod mat5;
mod plane;
mod vec2;
mod vec3;
mod vec4;

pub use mat5::Mat5;
pub use plane::RotationPlane;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Threshold below which magnitudes and projection denominators are treated
/// as zero. Normalizing a near-zero vector or projecting a point at the
/// viewer's plane yields a zero vector instead of dividing by near-zero.
pub const EPSILON: f32 = 1e-6;
