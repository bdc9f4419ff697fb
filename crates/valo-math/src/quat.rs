//! Quaternion type for 3D rotations.
//!
//! Values are not auto-normalized; callers compose with
//! [`multiply`](Quaternion::multiply) and normalize explicitly when unit
//! length matters.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::{Quaternion, Vec3};
//!
//! let q = Quaternion::from_axis_angle(Vec3::Z, std::f64::consts::FRAC_PI_2);
//! let v = q.transform_vector(Vec3::X);
//! assert!((v.y - 1.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_number};
use valo_core::scalar::{log_hypot, EPSILON};
use valo_core::{Resolvable, ResolveError};

use crate::{Mat3, Mat4, Vec3};

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// Real part.
    pub w: f64,
    /// First imaginary part.
    pub x: f64,
    /// Second imaginary part.
    pub y: f64,
    /// Third imaginary part.
    pub z: f64,
}

/// The union of input shapes [`Quaternion`] resolves from.
///
/// Shape priority: canonical value, `[w, x, y, z]`, text
/// (`"w + xi + yj + zk"`). Note the array leads with `w`, unlike
/// [`Vec3`]'s trailing homogeneous component.
#[derive(Debug, Clone, PartialEq)]
pub enum QuaternionLike {
    /// Canonical value passthrough.
    Value(Quaternion),
    /// `[w, x, y, z]`.
    Array([f64; 4]),
    /// `"w + xi + yj + zk"`.
    Text(String),
}

impl Quaternion {
    /// The zero quaternion, the canonical result of degenerate
    /// operations.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Checked constructor: fails if any component is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(w: f64, x: f64, y: f64, z: f64) -> ValidationResult<Self> {
        Ok(Self::new(
            ensure_finite(Self::NAME, "w", w)?,
            ensure_finite(Self::NAME, "x", x)?,
            ensure_finite(Self::NAME, "y", y)?,
            ensure_finite(Self::NAME, "z", z)?,
        ))
    }

    /// Creates the rotation of `angle` radians around `axis`.
    ///
    /// A near-zero axis yields [`Quaternion::IDENTITY`].
    pub fn from_axis_angle(axis: impl Into<Vec3>, angle: f64) -> Self {
        let axis = axis.into();
        let axis_length = axis.length();
        if axis_length < EPSILON {
            return Self::IDENTITY;
        }
        let half = angle * 0.5;
        let scale = half.sin() / axis_length;
        Self::new(
            half.cos(),
            axis.x * scale,
            axis.y * scale,
            axis.z * scale,
        )
    }

    /// Creates a rotation from Euler angles (radians).
    pub fn from_euler(angles: impl Into<Vec3>) -> Self {
        let v = angles.into();
        let (sx, cx) = (v.x * 0.5).sin_cos();
        let (sy, cy) = (v.y * 0.5).sin_cos();
        let (sz, cz) = (v.z * 0.5).sin_cos();
        Self::new(
            cx * cy * cz - sx * sy * sz,
            sx * cy * cz - sy * sz * cx,
            sy * cx * cz - sx * sz * cy,
            sx * sy * cz + sz * cx * cy,
        )
    }

    /// Converts to `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Adds `other` component-wise.
    #[inline]
    pub fn add(self, other: impl Into<Self>) -> Self {
        let q = other.into();
        Self::new(self.w + q.w, self.x + q.x, self.y + q.y, self.z + q.z)
    }

    /// Adds `other` in place.
    #[inline]
    pub fn offset(&mut self, other: impl Into<Self>) -> &mut Self {
        let q = other.into();
        self.w += q.w;
        self.x += q.x;
        self.y += q.y;
        self.z += q.z;
        self
    }

    /// Subtracts `other` component-wise.
    #[inline]
    pub fn subtract(self, other: impl Into<Self>) -> Self {
        let q = other.into();
        Self::new(self.w - q.w, self.x - q.x, self.y - q.y, self.z - q.z)
    }

    /// Scales every component.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(
            self.w * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: impl Into<Self>) -> f64 {
        let q = other.into();
        self.w * q.w + self.x * q.x + self.y * q.y + self.z * q.z
    }

    /// Norm (length).
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes to unit length.
    ///
    /// Norms below [`EPSILON`] yield [`Quaternion::ZERO`].
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length < EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / length)
    }

    /// Hamilton product `self * other`.
    ///
    /// Composes rotations: the result applies `other` first, then
    /// `self`.
    pub fn multiply(self, other: impl Into<Self>) -> Self {
        let q = other.into();
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
        )
    }

    /// Right division `self * other⁻¹`.
    ///
    /// A zero `other` yields [`Quaternion::ZERO`].
    pub fn divide(self, other: impl Into<Self>) -> Self {
        let q = other.into();
        let norm = q.length_squared();
        if norm == 0.0 {
            return Self::ZERO;
        }
        let inv = 1.0 / norm;
        Self::new(
            (self.w * q.w + self.x * q.x + self.y * q.y + self.z * q.z) * inv,
            (self.x * q.w - self.w * q.x - self.y * q.z + self.z * q.y) * inv,
            (self.y * q.w - self.w * q.y - self.z * q.x + self.x * q.z) * inv,
            (self.z * q.w - self.w * q.z - self.x * q.y + self.y * q.x) * inv,
        )
    }

    /// Multiplicative inverse (conjugate over squared norm).
    ///
    /// The zero quaternion yields [`Quaternion::ZERO`].
    pub fn inverse(self) -> Self {
        let norm = self.length_squared();
        if norm == 0.0 {
            return Self::ZERO;
        }
        let inv = 1.0 / norm;
        Self::new(self.w * inv, -self.x * inv, -self.y * inv, -self.z * inv)
    }

    /// Conjugate (negated vector part).
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Quaternion exponential.
    ///
    /// A zero vector part reduces to the scalar `e^w`.
    pub fn exp(self) -> Self {
        let vector_length = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let exp_w = self.w.exp();
        if vector_length == 0.0 {
            return Self::new(exp_w, 0.0, 0.0, 0.0);
        }
        let scale = exp_w * vector_length.sin() / vector_length;
        Self::new(
            exp_w * vector_length.cos(),
            self.x * scale,
            self.y * scale,
            self.z * scale,
        )
    }

    /// Quaternion logarithm.
    ///
    /// The complex-like case (vector part on the x axis) goes through
    /// [`log_hypot`] so huge magnitudes do not overflow the squared
    /// norm.
    pub fn log(self) -> Self {
        if self.y == 0.0 && self.z == 0.0 {
            return Self::new(log_hypot(self.w, self.x), self.x.atan2(self.w), 0.0, 0.0);
        }
        let vector_length = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let scale = vector_length.atan2(self.w) / vector_length;
        Self::new(
            0.5 * self.length_squared().ln(),
            self.x * scale,
            self.y * scale,
            self.z * scale,
        )
    }

    /// Rotates a vector: `q * v * q⁻¹`.
    pub fn transform_vector(self, vec: impl Into<Vec3>) -> Vec3 {
        let v = vec.into();
        let qv = Vec3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        v + t * self.w + qv.cross(t)
    }

    /// Reads the components as a vector: `(x, y, z)` with `w` in the
    /// homogeneous slot.
    #[inline]
    pub const fn to_vector(self) -> Vec3 {
        Vec3::with_w(self.x, self.y, self.z, self.w)
    }

    /// Converts to axis-angle form: the unit axis in `(x, y, z)` and the
    /// angle in `w`.
    ///
    /// Near the identity rotation the axis is indeterminate; the raw
    /// vector part with a zero angle is returned.
    pub fn to_axis_angle(self) -> Vec3 {
        let sin_squared = 1.0 - self.w * self.w;
        if sin_squared <= EPSILON {
            return Vec3::with_w(self.x, self.y, self.z, 0.0);
        }
        let inv_sin = 1.0 / sin_squared.sqrt();
        let angle = 2.0 * self.w.acos();
        Vec3::with_w(
            self.x * inv_sin,
            self.y * inv_sin,
            self.z * inv_sin,
            angle,
        )
    }

    /// Converts to Euler angles (radians).
    pub fn to_euler(self) -> Vec3 {
        fn asin_clamped(t: f64) -> f64 {
            if t >= 1.0 {
                std::f64::consts::FRAC_PI_2
            } else if t <= -1.0 {
                -std::f64::consts::FRAC_PI_2
            } else {
                t.asin()
            }
        }
        Vec3::new(
            -(2.0 * (self.y * self.z - self.w * self.x))
                .atan2(1.0 - 2.0 * (self.x * self.x + self.y * self.y)),
            asin_clamped(2.0 * (self.x * self.z + self.w * self.y)),
            -(2.0 * (self.x * self.y - self.w * self.z))
                .atan2(1.0 - 2.0 * (self.y * self.y + self.z * self.z)),
        )
    }

    /// Converts to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Mat3::from_rows([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    /// Converts to a 4x4 rotation matrix.
    pub fn to_mat4(self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    /// Converts to a glam [`DQuat`](glam::DQuat).
    #[inline]
    pub fn to_glam(self) -> glam::DQuat {
        glam::DQuat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from a glam [`DQuat`](glam::DQuat).
    #[inline]
    pub fn from_glam(q: glam::DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Resolvable for Quaternion {
    type Like = QuaternionLike;
    const NAME: &'static str = "Quaternion";

    fn cast(like: QuaternionLike) -> Option<Self> {
        match like {
            QuaternionLike::Value(q) => Some(q),
            QuaternionLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::new(a[0], a[1], a[2], a[3])),
            QuaternionLike::Text(text) => {
                let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
                let mut parts = compact.split('+');
                let w = parse_number(parts.next()?)?;
                let x = parse_number(parts.next()?.strip_suffix('i')?)?;
                let y = parse_number(parts.next()?.strip_suffix('j')?)?;
                let z = parse_number(parts.next()?.strip_suffix('k')?)?;
                if parts.next().is_some() {
                    return None;
                }
                Some(Self::new(w, x, y, z))
            }
        }
    }
}

impl fmt::Display for Quaternion {
    /// Formats as `w + xi + yj + zk`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}

impl FromStr for Quaternion {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<(f64, f64, f64, f64)> for Quaternion {
    #[inline]
    fn from((w, x, y, z): (f64, f64, f64, f64)) -> Self {
        Self::new(w, x, y, z)
    }
}

impl From<Quaternion> for QuaternionLike {
    #[inline]
    fn from(q: Quaternion) -> Self {
        QuaternionLike::Value(q)
    }
}

impl From<[f64; 4]> for QuaternionLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        QuaternionLike::Array(a)
    }
}

impl From<&str> for QuaternionLike {
    #[inline]
    fn from(s: &str) -> Self {
        QuaternionLike::Text(s.to_owned())
    }
}

impl From<String> for QuaternionLike {
    #[inline]
    fn from(s: String) -> Self {
        QuaternionLike::Text(s)
    }
}

// Delegate conversion: a Vec3 reads as (w, x, y, z) with its
// homogeneous component as the real part.

impl From<Vec3> for QuaternionLike {
    #[inline]
    fn from(v: Vec3) -> Self {
        QuaternionLike::Value(v.to_quaternion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_quat_eq(a: Quaternion, b: Quaternion, epsilon: f64) {
        assert_relative_eq!(a.w, b.w, epsilon = epsilon);
        assert_relative_eq!(a.x, b.x, epsilon = epsilon);
        assert_relative_eq!(a.y, b.y, epsilon = epsilon);
        assert_relative_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn test_quaternion_identity_multiply() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(Quaternion::IDENTITY.multiply(q), q);
        assert_eq!(q.multiply(Quaternion::IDENTITY), q);
    }

    #[test]
    fn test_quaternion_normalize() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0).normalize();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_eq!(Quaternion::ZERO.normalize(), Quaternion::ZERO);
    }

    #[test]
    fn test_quaternion_inverse_multiply() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, 0.5), 0.8);
        assert_quat_eq(q.multiply(q.inverse()), Quaternion::IDENTITY, 1e-12);
        assert_quat_eq(q.divide(q), Quaternion::IDENTITY, 1e-12);
    }

    #[test]
    fn test_quaternion_transform_vector() {
        let q = Quaternion::from_axis_angle(Vec3::Z, std::f64::consts::FRAC_PI_2);
        let v = q.transform_vector(Vec3::X);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quaternion_matrix_matches_transform() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, -1.0, 0.7), 1.1);
        let v = Vec3::new(1.0, 2.0, 3.0);
        let rotated = q.transform_vector(v);
        let m = q.to_mat4();
        let via_matrix = m.transform_point(v);
        assert_relative_eq!(rotated.x, via_matrix.x, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, via_matrix.y, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, via_matrix.z, epsilon = 1e-12);
    }

    #[test]
    fn test_quaternion_exp_log_roundtrip() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 0.6);
        assert_quat_eq(q.log().exp(), q, 1e-12);
    }

    #[test]
    fn test_quaternion_log_complex_case() {
        // Vector part on the x axis goes through the stable path.
        let q = Quaternion::new(3.0, 4.0, 0.0, 0.0);
        let log = q.log();
        assert_relative_eq!(log.w, 5.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(log.x, (4.0_f64).atan2(3.0), epsilon = 1e-12);
        assert_eq!((log.y, log.z), (0.0, 0.0));
    }

    #[test]
    fn test_quaternion_axis_angle_roundtrip() {
        let axis = Vec3::new(1.0, 2.0, 3.0).normalize();
        let q = Quaternion::from_axis_angle(axis, 0.9);
        let aa = q.to_axis_angle();
        assert_relative_eq!(aa.w, 0.9, epsilon = 1e-12);
        assert_relative_eq!(aa.x, axis.x, epsilon = 1e-12);
        assert_relative_eq!(aa.y, axis.y, epsilon = 1e-12);
        assert_relative_eq!(aa.z, axis.z, epsilon = 1e-12);
    }

    #[test]
    fn test_quaternion_resolve_shapes() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(Quaternion::resolve([1.0, 0.0, 0.0, 0.0]).unwrap(), q);
        assert_eq!(Quaternion::resolve("1 + 0i + 0j + 0k").unwrap(), q);
        assert_eq!(
            Quaternion::resolve("0.5 + -1i + 2j + 3.5k").unwrap(),
            Quaternion::new(0.5, -1.0, 2.0, 3.5)
        );
    }

    #[test]
    fn test_quaternion_resolve_failure() {
        let err = Quaternion::resolve("1 + 2i + 3j").unwrap_err();
        assert_eq!(err.target, "Quaternion");
        assert!(Quaternion::resolve("1 + 2x + 3j + 4k").is_err());
    }

    #[test]
    fn test_quaternion_display_roundtrip() {
        let q = Quaternion::new(1.0, -0.5, 0.25, 2.0);
        assert_eq!(q.to_string(), "1 + -0.5i + 0.25j + 2k");
        assert_eq!(Quaternion::resolve(q.to_string()).unwrap(), q);
    }

    #[test]
    fn test_quaternion_try_new() {
        assert!(Quaternion::try_new(1.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Quaternion::try_new(f64::NAN, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_quaternion_glam_roundtrip() {
        let q = Quaternion::from_axis_angle(Vec3::Y, 1.3);
        assert_eq!(Quaternion::from_glam(q.to_glam()), q);
    }
}
