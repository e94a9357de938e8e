//! Hyperwire - a 4D wireframe viewer core
//!
//! Generates vertex/edge topology for canonical 4D solids, rotates them
//! through any of the six coordinate planes with 5x5 homogeneous matrices,
//! and projects them 4D -> 3D -> 2D onto an abstract drawing surface.
//! Windowing, rasterization, and key mapping are external collaborators
//! behind the [`hyperwire_render::DrawSurface`] trait and the
//! [`hyperwire_engine::Command`] set.

pub mod config;

pub use hyperwire_core::{Color, Edge, Geometry, Object4D, Scene, ShapeKind};
pub use hyperwire_engine::{Axis4, Command, Direction, Engine, PlaneSet, RotationState};
pub use hyperwire_math::{Mat5, RotationPlane, Vec2, Vec3, Vec4};
pub use hyperwire_render::{Camera4D, DrawSurface, RecordingSurface, Renderer};
