//! 3x3 matrix type for 2D transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order. [`Mat3::multiply`]
//! combines the *other* matrix's rows against this matrix's columns:
//!
//! ```text
//! out(i, j) = sum over k of other(i, k) * self(k, j)
//! ```
//!
//! Vectors are **column vectors** (translation lives in the last
//! column), so every builder step left-multiplies the accumulated
//! result and `Mat3::IDENTITY.scale(s).rotate(r).translate(t)` composes
//! scale-then-rotate-then-translate - the object-to-world order.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::Mat3;
//!
//! let m = Mat3::IDENTITY.translate((10.0, 5.0));
//! assert_eq!(m.m[0][2], 10.0);
//! assert_eq!(m.m[1][2], 5.0);
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use valo_core::probe::{is_valid_number, parse_components};
use valo_core::{Resolvable, ResolveError};

use crate::{Mat4, Vec2};

/// A 3x3 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2].
    pub m: [[f64; 3]; 3],
}

/// The union of input shapes [`Mat3`] resolves from.
///
/// Shape priority: canonical value, flat `[f64; 9]`, nested rows,
/// scalar broadcast to all nine entries, text (nine comma-separated
/// numbers).
#[derive(Debug, Clone, PartialEq)]
pub enum Mat3Like {
    /// Canonical value passthrough.
    Value(Mat3),
    /// Flat row-major array.
    Array([f64; 9]),
    /// Nested row arrays.
    Rows([[f64; 3]; 3]),
    /// Nine comma-separated numbers, row-major.
    Text(String),
    /// Scalar broadcast to every entry.
    Scalar(f64),
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(a: [f64; 9]) -> Self {
        Self::from_rows([
            [a[0], a[1], a[2]],
            [a[3], a[4], a[5]],
            [a[6], a[7], a[8]],
        ])
    }

    /// A 2D screen-space projection matrix for a viewport of the given
    /// pixel size (origin top-left, y flipped).
    #[inline]
    pub fn projection(width: f64, height: f64) -> Self {
        Self::from_array([
            2.0 / width, 0.0, -1.0,
            0.0, -2.0 / height, 1.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Converts to a flat row-major array.
    #[inline]
    pub const fn to_array(&self) -> [f64; 9] {
        [
            self.m[0][0], self.m[0][1], self.m[0][2],
            self.m[1][0], self.m[1][1], self.m[1][2],
            self.m[2][0], self.m[2][1], self.m[2][2],
        ]
    }

    /// Returns the nested row arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[f64; 3]; 3] {
        self.m
    }

    /// Adds two matrices entry-wise.
    pub fn add(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][j] + b.m[i][j];
            }
        }
        out
    }

    /// Subtracts `other` entry-wise.
    pub fn subtract(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][j] - b.m[i][j];
            }
        }
        out
    }

    /// Multiplies every entry by a scalar.
    pub fn multiply_scalar(&self, scalar: f64) -> Self {
        let mut out = *self;
        for row in &mut out.m {
            for v in row {
                *v *= scalar;
            }
        }
        out
    }

    /// Multiplies with `other`, combining `other`'s rows against this
    /// matrix's columns.
    ///
    /// The result applies this matrix first and `other` second, which is
    /// what lets builder chains read in application order (see the
    /// module docs).
    pub fn multiply(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = b.m[i][0] * self.m[0][j]
                    + b.m[i][1] * self.m[1][j]
                    + b.m[i][2] * self.m[2][j];
            }
        }
        out
    }

    /// Applies a translation after this matrix.
    pub fn translate(&self, vec: impl Into<Vec2>) -> Self {
        let v = vec.into();
        self.multiply([
            1.0, 0.0, v.x,
            0.0, 1.0, v.y,
            0.0, 0.0, 1.0,
        ])
    }

    /// Applies a rotation (radians, counter-clockwise) after this
    /// matrix.
    pub fn rotate(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        self.multiply([
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Applies a scale after this matrix.
    pub fn scale(&self, vec: impl Into<Vec2>) -> Self {
        let v = vec.into();
        self.multiply([
            v.x, 0.0, 0.0,
            0.0, v.y, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Adjugate scaled by 1/det.
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Embeds this matrix into the upper-left corner of a [`Mat4`].
    pub fn to_mat4(&self) -> Mat4 {
        let m = &self.m;
        Mat4::from_array([
            m[0][0], m[0][1], m[0][2], 0.0,
            m[1][0], m[1][1], m[1][2], 0.0,
            m[2][0], m[2][1], m[2][2], 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Returns true if all entries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Converts to a glam [`DMat3`](glam::DMat3) (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from a glam [`DMat3`](glam::DMat3).
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transpose()
    }
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Resolvable for Mat3 {
    type Like = Mat3Like;
    const NAME: &'static str = "Mat3";

    fn cast(like: Mat3Like) -> Option<Self> {
        match like {
            Mat3Like::Value(m) => Some(m),
            Mat3Like::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_array(a)),
            Mat3Like::Rows(rows) => rows
                .iter()
                .flatten()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_rows(rows)),
            Mat3Like::Scalar(v) => is_valid_number(v).then(|| Self::from_array([v; 9])),
            Mat3Like::Text(text) => {
                parse_components::<9>(&text, ',').map(Self::from_array)
            }
        }
    }
}

impl fmt::Display for Mat3 {
    /// Formats as nine comma-separated numbers, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.to_array();
        let mut first = true;
        for v in a {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Mat3 {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<[f64; 9]> for Mat3 {
    #[inline]
    fn from(a: [f64; 9]) -> Self {
        Self::from_array(a)
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    #[inline]
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Mat3> for Mat3Like {
    #[inline]
    fn from(m: Mat3) -> Self {
        Mat3Like::Value(m)
    }
}

impl From<[f64; 9]> for Mat3Like {
    #[inline]
    fn from(a: [f64; 9]) -> Self {
        Mat3Like::Array(a)
    }
}

impl From<[[f64; 3]; 3]> for Mat3Like {
    #[inline]
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Mat3Like::Rows(rows)
    }
}

impl From<f64> for Mat3Like {
    #[inline]
    fn from(v: f64) -> Self {
        Mat3Like::Scalar(v)
    }
}

impl From<&str> for Mat3Like {
    #[inline]
    fn from(s: &str) -> Self {
        Mat3Like::Text(s.to_owned())
    }
}

impl From<String> for Mat3Like {
    #[inline]
    fn from(s: String) -> Self {
        Mat3Like::Text(s)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat_eq(a: &Mat3, b: &Mat3, epsilon: f64) {
        for (x, y) in a.to_array().iter().zip(b.to_array()) {
            assert_relative_eq!(*x, y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_mat3_identity_multiply() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(Mat3::IDENTITY.multiply(m), m);
        assert_eq!(m.multiply(Mat3::IDENTITY), m);
    }

    #[test]
    fn test_mat3_multiply_orientation() {
        // A later scale step multiplies an earlier translation; a later
        // translation is untouched by an earlier scale.
        let a = Mat3::IDENTITY.translate((1.0, 0.0)).scale((2.0, 2.0));
        assert_eq!(a.m[0][2], 2.0);
        let b = Mat3::IDENTITY.scale((2.0, 2.0)).translate((1.0, 0.0));
        assert_eq!(b.m[0][2], 1.0);
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_relative_eq!(m.determinant(), 1.0);
        assert_relative_eq!(Mat3::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert_mat_eq(&m.multiply(inv), &Mat3::IDENTITY, 1e-9);
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_rotate() {
        let m = Mat3::IDENTITY.rotate(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(m.m[0][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.m[0][1], -1.0);
        assert_relative_eq!(m.m[1][0], 1.0);
    }

    #[test]
    fn test_mat3_add_subtract() {
        let m = Mat3::from_array([1.0; 9]);
        assert_eq!(m.add(m), Mat3::from_array([2.0; 9]));
        assert_eq!(m.subtract(m), Mat3::ZERO);
        assert_eq!(m.multiply_scalar(3.0), Mat3::from_array([3.0; 9]));
    }

    #[test]
    fn test_mat3_resolve_shapes() {
        let id = Mat3::IDENTITY;
        assert_eq!(Mat3::resolve("1,0,0,0,1,0,0,0,1").unwrap(), id);
        assert_eq!(Mat3::resolve(id.to_array()).unwrap(), id);
        assert_eq!(Mat3::resolve(id.to_rows()).unwrap(), id);
        assert_eq!(Mat3::resolve(0.0).unwrap(), Mat3::ZERO);
    }

    #[test]
    fn test_mat3_resolve_failure() {
        let err = Mat3::resolve("1,0,0").unwrap_err();
        assert_eq!(err.target, "Mat3");
    }

    #[test]
    fn test_mat3_display_roundtrip() {
        let m = Mat3::from_array([1.5, 0.0, 0.0, 0.0, 2.0, 0.0, 3.0, -4.0, 1.0]);
        assert_eq!(Mat3::resolve(m.to_string()).unwrap(), m);
    }

    #[test]
    fn test_mat3_to_mat4() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let m4 = m.to_mat4();
        assert_eq!(m4.m[0][1], 2.0);
        assert_eq!(m4.m[2][2], 9.0);
        assert_eq!(m4.m[3][3], 1.0);
    }

    #[test]
    fn test_mat3_glam_roundtrip() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
        assert_eq!(Mat3::from_glam(m.to_glam()), m);
    }
}
