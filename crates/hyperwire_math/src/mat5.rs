//! 5x5 homogeneous matrix for 4D affine transforms
//!
//! Rows/columns 0-3 hold the 4x4 linear part; column 4 is the translation
//! column and row 4 the homogeneous row. Storage is row-major and vectors
//! are treated as columns, so `(a * b).transform(v)` applies `b` first.

use crate::{RotationPlane, Vec4};

/// A 4D affine transform as a 5x5 homogeneous matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat5 {
    m: [[f32; 5]; 5],
}

impl Default for Mat5 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat5 {
    /// The multiplicative unit
    pub const IDENTITY: Self = {
        let mut m = [[0.0f32; 5]; 5];
        let mut i = 0;
        while i < 5 {
            m[i][i] = 1.0;
            i += 1;
        }
        Self { m }
    };

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from explicit rows
    ///
    /// The `[[f32; 5]; 5]` type makes a malformed (non-5x5) input
    /// unrepresentable, so there is no runtime shape check to fail.
    #[inline]
    pub const fn from_rows(rows: [[f32; 5]; 5]) -> Self {
        Self { m: rows }
    }

    /// Get a single entry
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Set a single entry
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[row][col] = value;
    }

    /// Create a pure rotation in one of the six coordinate planes
    ///
    /// Embeds the standard 2x2 cosine/sine block into the identity at the
    /// plane's two axis rows/columns. `plane_rotation(p, 0.0)` is the
    /// identity for every plane.
    pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Self {
        let (p, q) = plane.axes();
        let cos = angle.cos();
        let sin = angle.sin();

        let mut result = Self::IDENTITY;
        result.m[p][p] = cos;
        result.m[p][q] = -sin;
        result.m[q][p] = sin;
        result.m[q][q] = cos;
        result
    }

    /// Create a translation matrix
    pub fn translation(offset: Vec4) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][4] = offset.x;
        result.m[1][4] = offset.y;
        result.m[2][4] = offset.z;
        result.m[3][4] = offset.w;
        result
    }

    /// Create a per-axis scaling matrix
    pub fn scaling(sx: f32, sy: f32, sz: f32, sw: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][0] = sx;
        result.m[1][1] = sy;
        result.m[2][2] = sz;
        result.m[3][3] = sw;
        result
    }

    /// Standard 5x5 matrix product: `self * other`
    ///
    /// Not commutative. With column vectors, the product applies `other`
    /// first, then `self`.
    #[allow(clippy::needless_range_loop)]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0f32; 5]; 5];
        for i in 0..5 {
            for j in 0..5 {
                let mut sum = 0.0;
                for k in 0..5 {
                    sum += self.m[i][k] * other.m[k][j];
                }
                result[i][j] = sum;
            }
        }
        Self { m: result }
    }

    /// Transform a 4D point: 4x4 linear part plus the translation column
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w + m[0][4],
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w + m[1][4],
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w + m[2][4],
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w + m[3][4],
        )
    }
}

impl std::ops::Mul for Mat5 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}
