//! Tesseract (4D hypercube) generator
//!
//! 16 vertices, one per sign combination of the four axes, indexed by bit
//! pattern: bit 0 picks the x sign, bit 1 y, bit 2 z, bit 3 w. Two vertices
//! are connected iff their indices differ in exactly one bit, which gives
//! every vertex degree 4 and the hypercube's 32 edges.

use hyperwire_math::Vec4;

use crate::{Color, Edge, Geometry};

pub(super) fn generate(size: f32) -> Geometry {
    let half = size * 0.5;

    let mut vertices = Vec::with_capacity(16);
    for i in 0u32..16 {
        let x = if i & 1 == 0 { -half } else { half };
        let y = if i & 2 == 0 { -half } else { half };
        let z = if i & 4 == 0 { -half } else { half };
        let w = if i & 8 == 0 { -half } else { half };
        vertices.push(Vec4::new(x, y, z, w));
    }

    let mut edges = Vec::with_capacity(32);
    for i in 0usize..16 {
        for j in (i + 1)..16 {
            let diff = i ^ j;
            if diff.count_ones() == 1 {
                edges.push(Edge::with_color(i, j, axis_color(diff)));
            }
        }
    }

    Geometry { vertices, edges }
}

/// Edge color keyed by the axis bit the edge runs along
fn axis_color(bit: usize) -> Color {
    match bit {
        1 => Color::RED,    // x
        2 => Color::GREEN,  // y
        4 => Color::BLUE,   // z
        8 => Color::YELLOW, // w
        _ => Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_edge_counts() {
        let g = generate(1.0);
        assert_eq!(g.vertices.len(), 16);
        assert_eq!(g.edges.len(), 32);
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let g = generate(1.0);
        let mut degree = [0usize; 16];
        for e in &g.edges {
            degree[e.start] += 1;
            degree[e.end] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }

    #[test]
    fn test_vertices_are_sign_combinations() {
        let g = generate(2.0);
        for v in &g.vertices {
            for c in [v.x, v.y, v.z, v.w] {
                assert_eq!(c.abs(), 1.0);
            }
        }
        // Bit pattern 0 is the all-negative corner, 15 the all-positive one
        assert_eq!(g.vertices[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(g.vertices[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_edge_colors_by_axis() {
        let g = generate(1.0);
        for e in &g.edges {
            let expected = match e.start ^ e.end {
                1 => Color::RED,
                2 => Color::GREEN,
                4 => Color::BLUE,
                8 => Color::YELLOW,
                other => panic!("unexpected edge bit difference {}", other),
            };
            assert_eq!(e.color, expected);
        }
    }

    #[test]
    fn test_all_edges_have_equal_length() {
        let g = generate(3.0);
        for e in &g.edges {
            let len = (g.vertices[e.end] - g.vertices[e.start]).length();
            assert!((len - 3.0).abs() < 0.0001);
        }
    }
}
