//! Core types for the Hyperwire viewer
//!
//! This crate provides the object model sitting between the math layer and
//! the projection/render layer:
//!
//! - [`Color`] - RGBA display color
//! - [`Edge`] - vertex-index pair plus color
//! - [`ShapeKind`] / [`Geometry`] - the closed set of shape generators
//! - [`Object4D`] - canonical vs working pose, centroid pivot, transforms
//! - [`Scene`] - ordered objects plus a selection cursor

mod color;
mod edge;
mod object;
mod scene;
mod shapes;

pub use color::Color;
pub use edge::Edge;
pub use object::Object4D;
pub use scene::Scene;
pub use shapes::{pentachoron_vertex_color, Geometry, ShapeKind};

// Re-export commonly used math types for convenience
pub use hyperwire_math::{Mat5, RotationPlane, Vec2, Vec3, Vec4};
