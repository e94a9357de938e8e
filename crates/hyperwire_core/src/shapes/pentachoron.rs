//! Pentachoron (5-cell, regular 4-simplex) generator
//!
//! Four vertices form a tetrahedral sign pattern at a fixed negative
//! w-offset and the fifth sits as an apex on the positive w-axis, scaled so
//! all ten pairwise edges share the same length (exactly `size`). The edge
//! set is the complete graph K5.

use hyperwire_math::Vec4;

use crate::{Color, Edge, Geometry};

/// One distinguishing color per vertex; edges take the color of their
/// lower-indexed endpoint.
const PALETTE: [Color; 5] = [
    Color::new(1.0, 0.39, 0.39, 1.0),
    Color::new(0.39, 1.0, 0.39, 1.0),
    Color::new(0.39, 0.39, 1.0, 1.0),
    Color::new(1.0, 1.0, 0.39, 1.0),
    Color::new(1.0, 0.39, 1.0, 1.0),
];

/// Marker color of a pentachoron vertex, used for the rendered vertex
/// points and their labels
pub fn vertex_color(index: usize) -> Color {
    PALETTE.get(index).copied().unwrap_or(Color::WHITE)
}

pub(super) fn generate(size: f32) -> Geometry {
    let scale = size / std::f32::consts::SQRT_2;
    let a = scale / 2.0;
    let b = scale / (2.0 * 5.0f32.sqrt());

    let vertices = vec![
        Vec4::new(a, a, a, -b),
        Vec4::new(-a, -a, a, -b),
        Vec4::new(-a, a, -a, -b),
        Vec4::new(a, -a, -a, -b),
        Vec4::new(0.0, 0.0, 0.0, 4.0 * b),
    ];

    let mut edges = Vec::with_capacity(10);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            edges.push(Edge::with_color(i, j, PALETTE[i]));
        }
    }

    Geometry { vertices, edges }
}
