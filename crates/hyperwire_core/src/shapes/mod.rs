//! Shape generators
//!
//! Each generator is a pure, deterministic function from shape parameters
//! to `(vertices, edges)`. The shape kinds form a closed set: a tagged enum
//! dispatched by match, which also makes shape parameters serializable for
//! configuration files.

mod hypersphere;
mod pentachoron;
mod tesseract;
mod toratope;

pub use pentachoron::vertex_color as pentachoron_vertex_color;

use serde::{Deserialize, Serialize};

use hyperwire_math::Vec4;

use crate::Edge;

/// Vertex/edge topology produced by a generator
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vec4>,
    pub edges: Vec<Edge>,
}

/// The closed set of shape kinds, each carrying its own parameters
///
/// Serializable so scene configuration can list shapes by name:
/// `{ type = "Tesseract", size = 1.0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    /// 4D hypercube: 16 vertices, 32 edges
    Tesseract {
        /// Full side length
        size: f32,
    },
    /// Regular 4-simplex (5-cell): 5 vertices, complete K5 edge set
    Pentachoron {
        /// Edge length
        size: f32,
    },
    /// Sampled 3-sphere wireframe: poles, great circles, and a spherical
    /// lattice joined by proximity edges
    Hypersphere {
        radius: f32,
        /// Angular sampling density (clamped to a minimum of 4)
        resolution: u32,
    },
    /// 4D torus swept by three angular parameters
    Toratope {
        /// Distance from torus center to tube center
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
        /// Steps of the two main angles (clamped to a minimum of 8)
        resolution: u32,
    },
}

impl ShapeKind {
    /// Convenience constructor for a tesseract
    pub fn tesseract(size: f32) -> Self {
        ShapeKind::Tesseract { size }
    }

    /// Convenience constructor for a pentachoron
    pub fn pentachoron(size: f32) -> Self {
        ShapeKind::Pentachoron { size }
    }

    /// Convenience constructor for a hypersphere
    pub fn hypersphere(radius: f32, resolution: u32) -> Self {
        ShapeKind::Hypersphere { radius, resolution }
    }

    /// Convenience constructor for a toratope
    pub fn toratope(major_radius: f32, minor_radius: f32, resolution: u32) -> Self {
        ShapeKind::Toratope {
            major_radius,
            minor_radius,
            resolution,
        }
    }

    /// Display name for labels and logs
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Tesseract { .. } => "Tesseract",
            ShapeKind::Pentachoron { .. } => "Pentachoron",
            ShapeKind::Hypersphere { .. } => "Hypersphere",
            ShapeKind::Toratope { .. } => "Toratope",
        }
    }

    /// Generate this shape's vertex/edge topology
    ///
    /// Deterministic: identical parameters always produce identical
    /// geometry.
    pub fn generate(&self) -> Geometry {
        let geometry = match *self {
            ShapeKind::Tesseract { size } => tesseract::generate(size),
            ShapeKind::Pentachoron { size } => pentachoron::generate(size),
            ShapeKind::Hypersphere { radius, resolution } => {
                hypersphere::generate(radius, resolution)
            }
            ShapeKind::Toratope {
                major_radius,
                minor_radius,
                resolution,
            } => toratope::generate(major_radius, minor_radius, resolution),
        };
        log::debug!(
            "generated {}: {} vertices, {} edges",
            self.name(),
            geometry.vertices.len(),
            geometry.edges.len()
        );
        geometry
    }
}
