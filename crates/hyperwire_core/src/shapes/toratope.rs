//! Toratope (4D torus) generator
//!
//! Vertices are sampled over a 3-parameter angular grid: theta1 sweeps the
//! major circle in the XY plane, theta2 the tube circle, and theta3 couples
//! the tube into the ZW plane. Each grid point connects to its successor
//! along each of the three angular indices (wrapping), forming three
//! families of topological circles with one color per family.

use std::f32::consts::TAU;

use hyperwire_math::Vec4;

use crate::{Color, Edge, Geometry};

/// Steps of the third (coupling) angle. Kept low so vertex count stays
/// `resolution^2 * 6` instead of cubing.
const THETA3_STEPS: usize = 6;

const MAJOR_COLOR: Color = Color::new(1.0, 0.39, 0.39, 1.0);
const TUBE_COLOR: Color = Color::new(0.39, 1.0, 0.39, 1.0);
const COUPLING_COLOR: Color = Color::new(0.39, 0.39, 1.0, 1.0);

pub(super) fn generate(major_radius: f32, minor_radius: f32, resolution: u32) -> Geometry {
    let steps1 = resolution.max(8) as usize;
    let steps2 = steps1;
    let steps3 = THETA3_STEPS;

    let mut vertices = Vec::with_capacity(steps1 * steps2 * steps3);
    for i in 0..steps1 {
        let theta1 = TAU * i as f32 / steps1 as f32;
        let (sin1, cos1) = theta1.sin_cos();

        for j in 0..steps2 {
            let theta2 = TAU * j as f32 / steps2 as f32;
            let (sin2, cos2) = theta2.sin_cos();

            for k in 0..steps3 {
                let theta3 = TAU * k as f32 / steps3 as f32;
                let (sin3, cos3) = theta3.sin_cos();

                let ring = major_radius + minor_radius * cos2 * cos3;
                vertices.push(Vec4::new(
                    ring * cos1,
                    ring * sin1,
                    minor_radius * sin2 * cos3,
                    minor_radius * sin3,
                ));
            }
        }
    }

    // Three edges per vertex: successor along each angular index, wrapping
    let index = |i: usize, j: usize, k: usize| (i * steps2 + j) * steps3 + k;
    let mut edges = Vec::with_capacity(vertices.len() * 3);
    for i in 0..steps1 {
        for j in 0..steps2 {
            for k in 0..steps3 {
                let current = index(i, j, k);
                edges.push(Edge::with_color(
                    current,
                    index((i + 1) % steps1, j, k),
                    MAJOR_COLOR,
                ));
                edges.push(Edge::with_color(
                    current,
                    index(i, (j + 1) % steps2, k),
                    TUBE_COLOR,
                ));
                edges.push(Edge::with_color(
                    current,
                    index(i, j, (k + 1) % steps3),
                    COUPLING_COLOR,
                ));
            }
        }
    }

    Geometry { vertices, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let g = generate(1.5, 0.5, 12);
        assert_eq!(g.vertices.len(), 12 * 12 * THETA3_STEPS);
    }

    #[test]
    fn test_edge_count_is_three_per_vertex() {
        let g = generate(1.5, 0.5, 8);
        assert_eq!(g.edges.len(), g.vertices.len() * 3);
    }

    #[test]
    fn test_resolution_floor() {
        // Resolutions below 8 are clamped up
        let g = generate(1.5, 0.5, 3);
        assert_eq!(g.vertices.len(), 8 * 8 * THETA3_STEPS);
    }

    #[test]
    fn test_edges_wrap_around() {
        let steps1 = 8usize;
        let g = generate(1.5, 0.5, steps1 as u32);
        let last_ring_vertex = (steps1 - 1) * steps1 * THETA3_STEPS;
        // The last major-circle step must connect back to the first
        assert!(g
            .edges
            .iter()
            .any(|e| e.start == last_ring_vertex && e.end == 0));
    }

    #[test]
    fn test_all_edge_indices_valid() {
        let g = generate(2.0, 0.7, 10);
        assert!(g.edges.iter().all(|e| e.is_valid(g.vertices.len())));
    }

    #[test]
    fn test_vertices_lie_on_torus() {
        // With theta3 = 0 (k = 0), points obey the classic 3D torus
        // equation: (sqrt(x^2+y^2) - R)^2 + z^2 == r^2
        let (major, minor) = (1.5, 0.5);
        let g = generate(major, minor, 8);
        for v in g.vertices.iter().step_by(THETA3_STEPS) {
            let ring = (v.x * v.x + v.y * v.y).sqrt() - major;
            let tube = (ring * ring + v.z * v.z).sqrt();
            assert!((tube - minor).abs() < 0.001);
            assert_eq!(v.w, 0.0);
        }
    }
}
