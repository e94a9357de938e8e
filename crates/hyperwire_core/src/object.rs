//! The 4D object model
//!
//! An object owns two vertex sets: the canonical pose fixed at generation
//! time, and the working pose currently on screen. Every transform is
//! recomputed from the canonical vertices about the object's centroid, so
//! per-frame rotation never compounds numerical error into the geometry.

use hyperwire_math::{Mat5, Vec4};

use crate::{Edge, ShapeKind};

/// A polytope or manifold in 4D space
#[derive(Clone, Debug)]
pub struct Object4D {
    kind: ShapeKind,
    /// Reference pose, written only by generation
    canonical_vertices: Vec<Vec4>,
    /// Displayed pose, replaced by every transform
    working_vertices: Vec<Vec4>,
    edges: Vec<Edge>,
    /// Mean of the canonical vertices, the pivot for transforms
    centroid: Vec4,
    /// Most recently applied transform, for diagnostics and reset
    last_transform: Mat5,
}

impl Object4D {
    /// Create an object by running its shape generator
    ///
    /// The generated vertices become both the canonical and the working
    /// pose, and the centroid is computed once from the canonical set.
    pub fn new(kind: ShapeKind) -> Self {
        let geometry = kind.generate();
        let centroid = mean(&geometry.vertices);
        Self {
            kind,
            working_vertices: geometry.vertices.clone(),
            canonical_vertices: geometry.vertices,
            edges: geometry.edges,
            centroid,
            last_transform: Mat5::IDENTITY,
        }
    }

    /// Discard all vertices and edges and re-run the generator
    ///
    /// The only way to change the canonical pose besides [`Self::translate`].
    pub fn regenerate(&mut self) {
        let geometry = self.kind.generate();
        self.centroid = mean(&geometry.vertices);
        self.working_vertices = geometry.vertices.clone();
        self.canonical_vertices = geometry.vertices;
        self.edges = geometry.edges;
        self.last_transform = Mat5::IDENTITY;
    }

    /// The shape kind this object was generated from
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Display name
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The currently displayed vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.working_vertices
    }

    /// The reference pose vertices
    #[inline]
    pub fn canonical_vertices(&self) -> &[Vec4] {
        &self.canonical_vertices
    }

    /// Edge topology (fixed at generation)
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The transform pivot (mean of the canonical vertices)
    #[inline]
    pub fn centroid(&self) -> Vec4 {
        self.centroid
    }

    /// The most recently applied transform
    #[inline]
    pub fn last_transform(&self) -> &Mat5 {
        &self.last_transform
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.working_vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Transform the canonical pose about the centroid into the working pose
    ///
    /// Each canonical vertex is translated to the origin by `-centroid`,
    /// transformed, and translated back, so the object rotates about its
    /// own center rather than the world origin. The working vertices are
    /// replaced wholesale; the canonical pose is never touched.
    pub fn apply_transform(&mut self, transform: &Mat5) {
        self.working_vertices.clear();
        for &vertex in &self.canonical_vertices {
            let centered = vertex - self.centroid;
            let transformed = transform.transform(centered);
            self.working_vertices.push(transformed + self.centroid);
        }
        self.last_transform = *transform;
    }

    /// Transform the working pose in place, on top of whatever transform
    /// is already showing
    ///
    /// This is the cumulative alternative to [`Self::apply_transform`]:
    /// floating error and scale compound frame over frame, which is
    /// exactly why the absolute path recomputes from the canonical pose.
    /// Kept for the explicitly-labeled cumulative rotation mode.
    pub fn compound_transform(&mut self, transform: &Mat5) {
        for vertex in &mut self.working_vertices {
            let centered = *vertex - self.centroid;
            *vertex = transform.transform(centered) + self.centroid;
        }
        self.last_transform = *transform;
    }

    /// Restore the working pose to an exact copy of the canonical pose
    pub fn reset_transform(&mut self) {
        self.working_vertices.clear();
        self.working_vertices.extend_from_slice(&self.canonical_vertices);
        self.last_transform = Mat5::IDENTITY;
    }

    /// Shift the object's canonical placement by a 4D offset
    ///
    /// Moves canonical vertices, working vertices, and centroid together,
    /// so the offset survives resets and re-transforms. (Offsetting only
    /// the working pose would be silently undone by the next reset.)
    pub fn translate(&mut self, offset: Vec4) {
        for v in &mut self.canonical_vertices {
            *v += offset;
        }
        for v in &mut self.working_vertices {
            *v += offset;
        }
        self.centroid += offset;
    }
}

fn mean(vertices: &[Vec4]) -> Vec4 {
    if vertices.is_empty() {
        return Vec4::ZERO;
    }
    let mut sum = Vec4::ZERO;
    for &v in vertices {
        sum += v;
    }
    sum * (1.0 / vertices.len() as f32)
}
