//! Hypersphere (3-sphere) wireframe generator
//!
//! There is no exact geodesic mesh here. Candidate points come from three
//! deterministic sources: designated poles on each axis, great-circle
//! reference rings in each coordinate plane, and a 4D spherical-coordinate
//! lattice. A minimum-distance test rejects candidates that land too close
//! to an accepted vertex, then edges join each vertex to its nearest
//! neighbors within a distance cap. The thresholds directly control
//! vertex/edge density.

use std::f32::consts::{PI, TAU};

use hyperwire_math::{RotationPlane, Vec4};

use crate::{Color, Edge, Geometry};

/// Candidates closer than this fraction of the radius to an accepted
/// vertex are rejected.
const DEDUP_FACTOR: f32 = 0.2;
/// Edges only form between vertices within this fraction of the radius.
const CONNECT_FACTOR: f32 = 0.5;
/// Each vertex initiates at most this many edges, nearest first.
const MAX_NEIGHBORS: usize = 4;

pub(super) fn generate(radius: f32, resolution: u32) -> Geometry {
    let resolution = resolution.max(4) as usize;
    let dedup = DEDUP_FACTOR * radius;

    let mut vertices: Vec<Vec4> = Vec::new();

    // Poles on each axis
    for axis in 0..4 {
        push_unique(&mut vertices, axis_unit(axis) * radius, dedup);
        push_unique(&mut vertices, axis_unit(axis) * -radius, dedup);
    }

    // Great-circle reference rings, one per coordinate plane
    for plane in RotationPlane::ALL {
        let (p, q) = plane.axes();
        for k in 0..resolution {
            let angle = TAU * k as f32 / resolution as f32;
            let mut candidate = Vec4::ZERO;
            set_axis(&mut candidate, p, radius * angle.cos());
            set_axis(&mut candidate, q, radius * angle.sin());
            push_unique(&mut vertices, candidate, dedup);
        }
    }

    // Spherical-coordinate lattice over three angles
    let steps = resolution / 2;
    for i in 0..steps {
        let theta1 = PI * i as f32 / steps as f32;
        let (sin1, cos1) = theta1.sin_cos();
        for j in 0..steps {
            let theta2 = PI * j as f32 / steps as f32;
            let (sin2, cos2) = theta2.sin_cos();
            for k in 0..steps {
                let theta3 = TAU * k as f32 / steps as f32;
                let (sin3, cos3) = theta3.sin_cos();

                let candidate = Vec4::new(
                    radius * sin1 * sin2 * cos3,
                    radius * sin1 * sin2 * sin3,
                    radius * sin1 * cos2,
                    radius * cos1,
                );
                push_unique(&mut vertices, candidate, dedup);
            }
        }
    }

    // Proximity edges: nearest neighbors within the cap, ties broken by
    // ascending distance. Each pair is added from its lower endpoint only.
    let connect = CONNECT_FACTOR * radius;
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        let mut neighbors: Vec<(usize, f32)> = Vec::new();
        for (j, v) in vertices.iter().enumerate() {
            if j == i {
                continue;
            }
            let distance = (*v - vertices[i]).length();
            if distance < connect {
                neighbors.push((j, distance));
            }
        }
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));
        neighbors.truncate(MAX_NEIGHBORS);

        for (j, _) in neighbors {
            if i < j {
                edges.push(Edge::with_color(i, j, w_gradient(vertices[i].w, radius)));
            }
        }
    }

    Geometry { vertices, edges }
}

fn axis_unit(axis: usize) -> Vec4 {
    match axis {
        0 => Vec4::X,
        1 => Vec4::Y,
        2 => Vec4::Z,
        _ => Vec4::W,
    }
}

fn set_axis(v: &mut Vec4, axis: usize, value: f32) {
    match axis {
        0 => v.x = value,
        1 => v.y = value,
        2 => v.z = value,
        _ => v.w = value,
    }
}

/// Accept `candidate` unless it sits within `threshold` of an accepted
/// vertex.
fn push_unique(vertices: &mut Vec<Vec4>, candidate: Vec4, threshold: f32) {
    let too_close = vertices
        .iter()
        .any(|v| (*v - candidate).length() < threshold);
    if !too_close {
        vertices.push(candidate);
    }
}

/// Gradient over the normalized w-coordinate: blue at -radius through green
/// to red at +radius.
fn w_gradient(w: f32, radius: f32) -> Color {
    let t = (((w / radius) + 1.0) * 0.5).clamp(0.0, 1.0);
    Color::from_rgb(
        (t * 2.0).min(1.0),
        1.0 - (t - 0.5).abs() * 2.0,
        ((1.0 - t) * 2.0).min(1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vertices_on_sphere() {
        let radius = 1.0;
        let g = generate(radius, 8);
        for v in &g.vertices {
            assert!((v.length() - radius).abs() < 0.0001);
        }
    }

    #[test]
    fn test_minimum_vertex_spacing() {
        let radius = 1.0;
        let g = generate(radius, 8);
        let min_spacing = DEDUP_FACTOR * radius;
        for i in 0..g.vertices.len() {
            for j in (i + 1)..g.vertices.len() {
                let d = (g.vertices[j] - g.vertices[i]).length();
                assert!(
                    d >= min_spacing - 0.0001,
                    "vertices {} and {} are {} apart",
                    i,
                    j,
                    d
                );
            }
        }
    }

    #[test]
    fn test_edges_respect_distance_cap() {
        // Resolution 12 is dense enough for the proximity pass to find
        // neighbors inside the cap; sparser samplings may yield no edges.
        let radius = 2.0;
        let g = generate(radius, 12);
        assert!(!g.edges.is_empty());
        for e in &g.edges {
            let len = (g.vertices[e.end] - g.vertices[e.start]).length();
            assert!(len < CONNECT_FACTOR * radius);
        }
    }

    #[test]
    fn test_neighbor_cap_per_source_vertex() {
        let g = generate(1.0, 12);
        let mut initiated = vec![0usize; g.vertices.len()];
        for e in &g.edges {
            initiated[e.start] += 1;
        }
        assert!(initiated.iter().all(|&n| n <= MAX_NEIGHBORS));
    }

    #[test]
    fn test_no_duplicate_edges() {
        let g = generate(1.0, 8);
        let mut seen = std::collections::HashSet::new();
        for e in &g.edges {
            assert!(e.start < e.end);
            assert!(seen.insert((e.start, e.end)));
        }
    }

    #[test]
    fn test_poles_are_present() {
        let g = generate(1.0, 8);
        for axis in 0..4 {
            let pole = axis_unit(axis);
            assert!(
                g.vertices.iter().any(|v| (*v - pole).length() < 0.0001),
                "missing +pole on axis {}",
                axis
            );
        }
    }

    #[test]
    fn test_w_gradient_endpoints() {
        let bottom = w_gradient(-1.0, 1.0);
        assert_eq!(bottom.r, 0.0);
        assert_eq!(bottom.b, 1.0);

        let top = w_gradient(1.0, 1.0);
        assert_eq!(top.r, 1.0);
        assert_eq!(top.b, 0.0);

        let mid = w_gradient(0.0, 1.0);
        assert_eq!(mid.g, 1.0);
    }
}
