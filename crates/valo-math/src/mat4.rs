//! 4x4 matrix type for 3D transforms.
//!
//! Same conventions as [`Mat3`](crate::Mat3): row-major storage, column
//! vectors, and a [`multiply`](Mat4::multiply) that combines the other
//! matrix's rows against this matrix's columns so builder chains read in
//! application order.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::{Mat4, Vec3};
//!
//! let m = Mat4::IDENTITY
//!     .scale((2.0, 2.0, 2.0))
//!     .translate((0.0, 1.0, 0.0));
//! let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
//! assert_eq!(p, Vec3::new(2.0, 1.0, 0.0));
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use valo_core::probe::{is_valid_number, parse_components};
use valo_core::{Resolvable, ResolveError};

use crate::Vec3;

/// A 4x4 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3].
    pub m: [[f64; 4]; 4],
}

/// The union of input shapes [`Mat4`] resolves from.
///
/// Shape priority: canonical value, flat `[f64; 16]`, nested rows,
/// scalar broadcast, text (sixteen comma-separated numbers).
#[derive(Debug, Clone, PartialEq)]
pub enum Mat4Like {
    /// Canonical value passthrough.
    Value(Mat4),
    /// Flat row-major array.
    Array([f64; 16]),
    /// Nested row arrays.
    Rows([[f64; 4]; 4]),
    /// Sixteen comma-separated numbers, row-major.
    Text(String),
    /// Scalar broadcast to every entry.
    Scalar(f64),
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(a: [f64; 16]) -> Self {
        Self::from_rows([
            [a[0], a[1], a[2], a[3]],
            [a[4], a[5], a[6], a[7]],
            [a[8], a[9], a[10], a[11]],
            [a[12], a[13], a[14], a[15]],
        ])
    }

    /// An orthographic projection onto the given clip box.
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Self {
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, (left + right) / (left - right)],
            [0.0, 2.0 / (top - bottom), 0.0, (bottom + top) / (bottom - top)],
            [0.0, 0.0, 2.0 / (near - far), (near + far) / (near - far)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// A perspective projection with the given vertical field of view
    /// (radians), aspect ratio and near/far planes.
    pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = (std::f64::consts::PI * 0.5 - 0.5 * fov).tan();
        let range_inv = 1.0 / (near - far);
        Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (near + far) * range_inv, near * far * range_inv * 2.0],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Converts to a flat row-major array.
    pub const fn to_array(&self) -> [f64; 16] {
        [
            self.m[0][0], self.m[0][1], self.m[0][2], self.m[0][3],
            self.m[1][0], self.m[1][1], self.m[1][2], self.m[1][3],
            self.m[2][0], self.m[2][1], self.m[2][2], self.m[2][3],
            self.m[3][0], self.m[3][1], self.m[3][2], self.m[3][3],
        ]
    }

    /// Returns the nested row arrays.
    #[inline]
    pub const fn to_rows(&self) -> [[f64; 4]; 4] {
        self.m
    }

    /// Adds two matrices entry-wise.
    pub fn add(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[i][j] + b.m[i][j];
            }
        }
        out
    }

    /// Subtracts `other` entry-wise.
    pub fn subtract(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
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
    /// matrix's columns (see the crate docs for the composition order
    /// this implies).
    pub fn multiply(&self, other: impl Into<Self>) -> Self {
        let b = other.into();
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = (0..4).map(|k| b.m[i][k] * self.m[k][j]).sum();
            }
        }
        out
    }

    /// Applies a translation after this matrix.
    pub fn translate(&self, vec: impl Into<Vec3>) -> Self {
        let v = vec.into();
        self.multiply([
            1.0, 0.0, 0.0, v.x,
            0.0, 1.0, 0.0, v.y,
            0.0, 0.0, 1.0, v.z,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Applies a rotation around the X axis (radians) after this matrix.
    pub fn rotate_x(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        self.multiply([
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Applies a rotation around the Y axis (radians) after this matrix.
    pub fn rotate_y(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        self.multiply([
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Applies a rotation around the Z axis (radians) after this matrix.
    pub fn rotate_z(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        self.multiply([
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Applies Euler rotations (X, then Y, then Z) after this matrix.
    pub fn rotate(&self, vec: impl Into<Vec3>) -> Self {
        let v = vec.into();
        self.rotate_x(v.x).rotate_y(v.y).rotate_z(v.z)
    }

    /// Applies a scale after this matrix.
    pub fn scale(&self, vec: impl Into<Vec3>) -> Self {
        let v = vec.into();
        self.multiply([
            v.x, 0.0, 0.0, 0.0,
            0.0, v.y, 0.0, 0.0,
            0.0, 0.0, v.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Transforms a point (w = 1), applying the perspective divide when
    /// the resulting w is non-zero.
    pub fn transform_point(&self, vec: impl Into<Vec3>) -> Vec3 {
        let v = vec.into();
        let m = &self.m;
        let x = m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3];
        let y = m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3];
        let z = m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3];
        let w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::with_w(x, y, z, w)
        }
    }

    /// Returns the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[j][i];
            }
        }
        out
    }

    fn minor(&self, row: usize, col: usize) -> f64 {
        let mut sub = [[0.0; 3]; 3];
        let mut r = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                sub[r][c] = self.m[i][j];
                c += 1;
            }
            r += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Computes the determinant by cofactor expansion along the first
    /// row.
    pub fn determinant(&self) -> f64 {
        (0..4)
            .map(|j| {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                sign * self.m[0][j] * self.minor(0, j)
            })
            .sum()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;
        let mut out = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                // Adjugate: transposed cofactors.
                out.m[j][i] = sign * self.minor(i, j) * inv_det;
            }
        }
        Some(out)
    }

    /// Returns true if all entries are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Converts to a glam [`DMat4`](glam::DMat4) (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat4 {
        glam::DMat4::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from a glam [`DMat4`](glam::DMat4).
    #[inline]
    pub fn from_glam(m: glam::DMat4) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transpose()
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Resolvable for Mat4 {
    type Like = Mat4Like;
    const NAME: &'static str = "Mat4";

    fn cast(like: Mat4Like) -> Option<Self> {
        match like {
            Mat4Like::Value(m) => Some(m),
            Mat4Like::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_array(a)),
            Mat4Like::Rows(rows) => rows
                .iter()
                .flatten()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_rows(rows)),
            Mat4Like::Scalar(v) => is_valid_number(v).then(|| Self::from_array([v; 16])),
            Mat4Like::Text(text) => parse_components::<16>(&text, ',').map(Self::from_array),
        }
    }
}

impl fmt::Display for Mat4 {
    /// Formats as sixteen comma-separated numbers, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in self.to_array() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Mat4 {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<[f64; 16]> for Mat4 {
    #[inline]
    fn from(a: [f64; 16]) -> Self {
        Self::from_array(a)
    }
}

impl From<[[f64; 4]; 4]> for Mat4 {
    #[inline]
    fn from(rows: [[f64; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Mat4> for Mat4Like {
    #[inline]
    fn from(m: Mat4) -> Self {
        Mat4Like::Value(m)
    }
}

impl From<[f64; 16]> for Mat4Like {
    #[inline]
    fn from(a: [f64; 16]) -> Self {
        Mat4Like::Array(a)
    }
}

impl From<[[f64; 4]; 4]> for Mat4Like {
    #[inline]
    fn from(rows: [[f64; 4]; 4]) -> Self {
        Mat4Like::Rows(rows)
    }
}

impl From<f64> for Mat4Like {
    #[inline]
    fn from(v: f64) -> Self {
        Mat4Like::Scalar(v)
    }
}

impl From<&str> for Mat4Like {
    #[inline]
    fn from(s: &str) -> Self {
        Mat4Like::Text(s.to_owned())
    }
}

impl From<String> for Mat4Like {
    #[inline]
    fn from(s: String) -> Self {
        Mat4Like::Text(s)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f64; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 4] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat_eq(a: &Mat4, b: &Mat4, epsilon: f64) {
        for (x, y) in a.to_array().iter().zip(b.to_array()) {
            assert_relative_eq!(*x, y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_mat4_identity_multiply() {
        assert_eq!(Mat4::IDENTITY.multiply(Mat4::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn test_mat4_translate_point() {
        let m = Mat4::IDENTITY.translate((1.0, 2.0, 3.0));
        let p = m.transform_point(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mat4_compose_order() {
        // scale is applied before the translation regardless of where
        // the point lands.
        let m = Mat4::IDENTITY
            .scale((2.0, 2.0, 2.0))
            .translate((10.0, 0.0, 0.0));
        let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(12.0, 0.0, 0.0));
    }

    #[test]
    fn test_mat4_rotate_z() {
        let m = Mat4::IDENTITY.rotate_z(std::f64::consts::FRAC_PI_2);
        let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0);
    }

    #[test]
    fn test_mat4_determinant() {
        assert_relative_eq!(Mat4::IDENTITY.determinant(), 1.0);
        let scaled = Mat4::IDENTITY.scale((2.0, 3.0, 4.0));
        assert_relative_eq!(scaled.determinant(), 24.0);
    }

    #[test]
    fn test_mat4_inverse() {
        let m = Mat4::IDENTITY
            .scale((2.0, 3.0, 4.0))
            .rotate_y(0.7)
            .translate((5.0, -2.0, 1.0));
        let inv = m.inverse().unwrap();
        assert_mat_eq(&m.multiply(inv), &Mat4::IDENTITY, 1e-9);
        assert_mat_eq(&inv.multiply(m), &Mat4::IDENTITY, 1e-9);
    }

    #[test]
    fn test_mat4_singular_inverse() {
        let m = Mat4::IDENTITY.scale((0.0, 1.0, 1.0));
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat4_perspective_divide() {
        let m = Mat4::perspective(std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let p = m.transform_point(Vec3::new(0.0, 0.0, -10.0));
        // On the view axis the projected x/y stay centered.
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn test_mat4_resolve_shapes() {
        let id = Mat4::IDENTITY;
        assert_eq!(Mat4::resolve(id.to_array()).unwrap(), id);
        assert_eq!(Mat4::resolve(id.to_rows()).unwrap(), id);
        assert_eq!(
            Mat4::resolve("1,0,0,0,0,1,0,0,0,0,1,0,0,0,0,1").unwrap(),
            id
        );
        assert_eq!(Mat4::resolve(1.0).unwrap(), Mat4::from_array([1.0; 16]));
    }

    #[test]
    fn test_mat4_resolve_failure() {
        let err = Mat4::resolve("1,2,3,4").unwrap_err();
        assert_eq!(err.target, "Mat4");
    }

    #[test]
    fn test_mat4_display_roundtrip() {
        let m = Mat4::IDENTITY.translate((1.5, -2.0, 0.25));
        assert_eq!(Mat4::resolve(m.to_string()).unwrap(), m);
    }

    #[test]
    fn test_mat4_glam_roundtrip() {
        let m = Mat4::IDENTITY.rotate((0.1, 0.2, 0.3)).translate((1.0, 2.0, 3.0));
        let back = Mat4::from_glam(m.to_glam());
        assert_mat_eq(&m, &back, 1e-12);
    }
}
