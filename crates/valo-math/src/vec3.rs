//! 3D vector type with a homogeneous `w` component.
//!
//! [`Vec3`] sits in the middle of the conversion graph: it can be read
//! as a position, a direction, an RGB/HSL triple or the vector part of a
//! quaternion.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::Vec3;
//! use valo_core::Resolvable;
//!
//! let v = Vec3::resolve("1,2,3;1").unwrap();
//! assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
//!
//! let cross = Vec3::X.cross(Vec3::Y);
//! assert_eq!(cross, Vec3::Z);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_components, parse_number};
use valo_core::scalar::{clamp, EPSILON};
use valo_core::{Resolvable, ResolveError};

use crate::Vec2;

/// A 3D vector with an optional homogeneous `w` component (default 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Homogeneous component, 1 unless set explicitly.
    pub w: f64,
}

/// The union of input shapes [`Vec3`] resolves from.
///
/// Shape priority: canonical value, `[x, y, z, w]`, `[x, y, z]`, scalar
/// broadcast, text (`"x,y,z"` / `"x,y,z;w"`). The 4-element array is
/// claimed as "vector plus homogeneous w"; [`Quaternion`] reads the same
/// literal as `[w, x, y, z]`.
///
/// [`Quaternion`]: crate::Quaternion
#[derive(Debug, Clone, PartialEq)]
pub enum Vec3Like {
    /// Canonical value passthrough.
    Value(Vec3),
    /// `[x, y, z]` with `w = 1`.
    Array([f64; 3]),
    /// `[x, y, z, w]`.
    ArrayW([f64; 4]),
    /// `"x,y,z"` or `"x,y,z;w"`.
    Text(String),
    /// Scalar broadcast to x, y and z.
    Scalar(f64),
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector with `w = 1`.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Creates a new vector with an explicit homogeneous component.
    #[inline]
    pub const fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with x, y and z set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Checked constructor: fails if any field is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(x: f64, y: f64, z: f64, w: f64) -> ValidationResult<Self> {
        Ok(Self::with_w(
            ensure_finite(Self::NAME, "x", x)?,
            ensure_finite(Self::NAME, "y", y)?,
            ensure_finite(Self::NAME, "z", z)?,
            ensure_finite(Self::NAME, "w", w)?,
        ))
    }

    /// Creates the vector pointing from `a` to `b`.
    #[inline]
    pub fn from_points(a: impl Into<Self>, b: impl Into<Self>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::new(b.x - a.x, b.y - a.y, b.z - a.z)
    }

    /// Component-wise clamp of `value` into `[min, max]`.
    pub fn clamp(value: impl Into<Self>, min: impl Into<Self>, max: impl Into<Self>) -> Self {
        let (v, lo, hi) = (value.into(), min.into(), max.into());
        Self::new(
            clamp(v.x, lo.x, hi.x),
            clamp(v.y, lo.y, hi.y),
            clamp(v.z, lo.z, hi.z),
        )
    }

    /// Intersects the line `line_start..line_end` with the plane through
    /// `plane_point` with normal `plane_normal`.
    ///
    /// A line parallel to the plane produces non-finite components (the
    /// parameter degenerates); callers that care should check
    /// [`is_finite`](Self::is_finite).
    pub fn intersect_plane(
        plane_point: impl Into<Self>,
        plane_normal: impl Into<Self>,
        line_start: impl Into<Self>,
        line_end: impl Into<Self>,
    ) -> Self {
        let normal = plane_normal.into().normalize();
        let (start, end) = (line_start.into(), line_end.into());
        let plane_d = -normal.dot(plane_point);
        let ad = start.dot(normal);
        let bd = end.dot(normal);
        let t = (-plane_d - ad) / (bd - ad);
        start + (end - start) * t
    }

    /// Converts to `[x, y, z]`, dropping the homogeneous component.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to `[x, y, z, w]`.
    #[inline]
    pub const fn to_array_w(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Projects onto the XY plane, keeping `w`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::with_w(self.x, self.y, self.w)
    }

    /// Reads the normalized components as an RGB triple.
    ///
    /// The result is a color `Like` array; feed it to
    /// `Rgba::resolve`/`Hsla::resolve` from `valo-color`.
    #[inline]
    pub fn to_rgb(self) -> [f64; 3] {
        let v = self.normalize();
        [v.x, v.y, v.z]
    }

    /// Reads the normalized components as an RGBA quadruple, with the
    /// normalized `w` as alpha.
    #[inline]
    pub fn to_rgba(self) -> [f64; 4] {
        let v = self.normalize();
        [v.x, v.y, v.z, v.w]
    }

    /// Reads the normalized components as an HSL triple.
    #[inline]
    pub fn to_hsl(self) -> [f64; 3] {
        self.to_rgb()
    }

    /// Reads the normalized components as an HSLA quadruple.
    #[inline]
    pub fn to_hsla(self) -> [f64; 4] {
        self.to_rgba()
    }

    /// Reads `(w, x, y, z)` as a quaternion.
    #[inline]
    pub const fn to_quaternion(self) -> crate::Quaternion {
        crate::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: impl Into<Self>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: impl Into<Self>) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: impl Into<Self>) -> f64 {
        let other = other.into();
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes to unit length, scaling `w` along with the components.
    ///
    /// Lengths below [`EPSILON`] yield [`Vec3::ZERO`].
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length < EPSILON {
            return Self::ZERO;
        }
        Self::with_w(
            self.x / length,
            self.y / length,
            self.z / length,
            self.w / length,
        )
    }

    /// Adds `other` in place, keeping this vector's `w`.
    #[inline]
    pub fn offset(&mut self, other: impl Into<Self>) -> &mut Self {
        let other = other.into();
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Returns the vector with x, y and z negated.
    #[inline]
    pub fn invert(self) -> Self {
        -self
    }

    /// Rounds every component (including `w`) to the nearest integer.
    #[inline]
    pub fn round(self) -> Self {
        Self::with_w(
            self.x.round(),
            self.y.round(),
            self.z.round(),
            self.w.round(),
        )
    }

    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to a glam [`DVec3`](glam::DVec3), dropping `w`.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from a glam [`DVec3`](glam::DVec3).
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Default for Vec3 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Resolvable for Vec3 {
    type Like = Vec3Like;
    const NAME: &'static str = "Vec3";

    fn cast(like: Vec3Like) -> Option<Self> {
        match like {
            Vec3Like::Value(v) => Some(v),
            Vec3Like::ArrayW(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::with_w(a[0], a[1], a[2], a[3])),
            Vec3Like::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::new(a[0], a[1], a[2])),
            Vec3Like::Scalar(v) => is_valid_number(v).then(|| Self::splat(v)),
            Vec3Like::Text(text) => {
                let (xyz, w) = match text.split_once(';') {
                    Some((xyz, w)) => (xyz, Some(w)),
                    None => (text.as_str(), None),
                };
                let [x, y, z] = parse_components::<3>(xyz, ',')?;
                match w {
                    Some(w) => Some(Self::with_w(x, y, z, parse_number(w)?)),
                    None => Some(Self::new(x, y, z)),
                }
            }
        }
    }
}

impl fmt::Display for Vec3 {
    /// Formats as `x,y,z`, appending `;w` only when `w != 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)?;
        if self.w != 1.0 {
            write!(f, ";{}", self.w)?;
        }
        Ok(())
    }
}

impl FromStr for Vec3 {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

// Infallible shapes.

impl From<(f64, f64, f64)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<[f64; 4]> for Vec3 {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::with_w(a[0], a[1], a[2], a[3])
    }
}

impl From<f64> for Vec3 {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

// Like-shape wrappers.

impl From<Vec3> for Vec3Like {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vec3Like::Value(v)
    }
}

impl From<[f64; 3]> for Vec3Like {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Vec3Like::Array(a)
    }
}

impl From<(f64, f64, f64)> for Vec3Like {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vec3Like::Array([x, y, z])
    }
}

impl From<[f64; 4]> for Vec3Like {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Vec3Like::ArrayW(a)
    }
}

impl From<f64> for Vec3Like {
    #[inline]
    fn from(v: f64) -> Self {
        Vec3Like::Scalar(v)
    }
}

impl From<&str> for Vec3Like {
    #[inline]
    fn from(s: &str) -> Self {
        Vec3Like::Text(s.to_owned())
    }
}

impl From<String> for Vec3Like {
    #[inline]
    fn from(s: String) -> Self {
        Vec3Like::Text(s)
    }
}

// Delegate conversion: a Vec3 can stand in wherever a Vec2 is resolved.

impl From<Vec3> for crate::Vec2Like {
    #[inline]
    fn from(v: Vec3) -> Self {
        crate::Vec2Like::Value(v.to_vec2())
    }
}

// Arithmetic operators; results carry w = 1.

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z, v.w), (1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_vec3_try_new() {
        assert!(Vec3::try_new(1.0, 2.0, 3.0, 1.0).is_ok());
        assert!(Vec3::try_new(1.0, 2.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_vec3_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_vec3_normalize() {
        let n = Vec3::new(2.0, 0.0, 0.0).normalize();
        assert_eq!(n.x, 1.0);
        assert_eq!(n.w, 0.5);
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_resolve_shapes() {
        let expected = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::resolve([1.0, 2.0, 3.0]).unwrap(), expected);
        assert_eq!(Vec3::resolve("1,2,3").unwrap(), expected);
        assert_eq!(
            Vec3::resolve("1,2,3;0.5").unwrap(),
            Vec3::with_w(1.0, 2.0, 3.0, 0.5)
        );
        assert_eq!(Vec3::resolve(2.0).unwrap(), Vec3::splat(2.0));
        assert_eq!(
            Vec3::resolve([1.0, 2.0, 3.0, 4.0]).unwrap(),
            Vec3::with_w(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_vec3_resolve_failure() {
        let err = Vec3::resolve("1,2").unwrap_err();
        assert_eq!(err.target, "Vec3");
        assert!(Vec3::resolve([f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_vec3_display_roundtrip() {
        let v = Vec3::new(1.0, -2.5, 3.0);
        assert_eq!(v.to_string(), "1,-2.5,3");
        assert_eq!(Vec3::resolve(v.to_string()).unwrap(), v);

        let vw = Vec3::with_w(1.0, 2.0, 3.0, 0.25);
        assert_eq!(vw.to_string(), "1,2,3;0.25");
        assert_eq!(Vec3::resolve(vw.to_string()).unwrap(), vw);
    }

    #[test]
    fn test_vec3_to_vec2() {
        let v = Vec3::with_w(1.0, 2.0, 3.0, 0.5);
        assert_eq!(v.to_vec2(), Vec2::with_w(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_vec3_to_rgb_normalizes() {
        let [r, g, b] = Vec3::new(2.0, 0.0, 0.0).to_rgb();
        assert_relative_eq!(r, 1.0);
        assert_eq!((g, b), (0.0, 0.0));
    }

    #[test]
    fn test_vec3_intersect_plane() {
        // Line crossing the z = 0 plane at (0, 0, 0).
        let hit = Vec3::intersect_plane(
            Vec3::ZERO,
            Vec3::Z,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(hit.z, 0.0);
    }

    #[test]
    fn test_vec3_to_quaternion() {
        let q = Vec3::with_w(1.0, 2.0, 3.0, 4.0).to_quaternion();
        assert_eq!(q.to_array(), [4.0, 1.0, 2.0, 3.0]);
    }
}
