//! 2D vector type with a homogeneous `w` component.
//!
//! [`Vec2`] is the workhorse of the geometry types: positions, sizes and
//! directions all resolve through it.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::Vec2;
//! use valo_core::Resolvable;
//!
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! // Any accepted shape resolves to the same value.
//! assert_eq!(Vec2::resolve("3,4").unwrap(), v);
//! assert_eq!(Vec2::resolve([3.0, 4.0]).unwrap(), v);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_components, parse_number};
use valo_core::scalar::{clamp, EPSILON};
use valo_core::{Resolvable, ResolveError};

/// A 2D vector with an optional homogeneous `w` component.
///
/// `w` defaults to 1 and carries projective/alpha-like semantics; plain
/// arithmetic (operators, [`dot`](Vec2::dot), …) ignores it and produces
/// results with `w = 1`.
///
/// # Example
///
/// ```rust
/// use valo_math::Vec2;
///
/// let a = Vec2::new(1.0, 2.0);
/// let b = a + Vec2::new(3.0, 4.0);
/// assert_eq!(b, Vec2::new(4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Homogeneous component, 1 unless set explicitly.
    pub w: f64,
}

/// The union of input shapes [`Vec2`] resolves from.
///
/// Shape priority: canonical value, `[x, y, w]`, `[x, y]`, scalar
/// broadcast, text (`"x,y"` / `"x,y;w"`). A 3-element array always means
/// "vector plus homogeneous w" for this target; color types claim the
/// same literal as an RGB triple.
#[derive(Debug, Clone, PartialEq)]
pub enum Vec2Like {
    /// Canonical value passthrough.
    Value(Vec2),
    /// `[x, y]` with `w = 1`.
    Array([f64; 2]),
    /// `[x, y, w]`.
    ArrayW([f64; 3]),
    /// `"x,y"` or `"x,y;w"`.
    Text(String),
    /// Scalar broadcast to both components.
    Scalar(f64),
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector with `w = 1`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, w: 1.0 }
    }

    /// Creates a new vector with an explicit homogeneous component.
    #[inline]
    pub const fn with_w(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Checked constructor: fails if any field is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(x: f64, y: f64, w: f64) -> ValidationResult<Self> {
        Ok(Self::with_w(
            ensure_finite(Self::NAME, "x", x)?,
            ensure_finite(Self::NAME, "y", y)?,
            ensure_finite(Self::NAME, "w", w)?,
        ))
    }

    /// Creates the vector pointing from `a` to `b`.
    #[inline]
    pub fn from_points(a: impl Into<Self>, b: impl Into<Self>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::new(b.x - a.x, b.y - a.y)
    }

    /// Component-wise clamp of `value` into `[min, max]`.
    pub fn clamp(value: impl Into<Self>, min: impl Into<Self>, max: impl Into<Self>) -> Self {
        let (v, lo, hi) = (value.into(), min.into(), max.into());
        Self::new(clamp(v.x, lo.x, hi.x), clamp(v.y, lo.y, hi.y))
    }

    /// Converts to `[x, y]`, dropping the homogeneous component.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Converts to `[x, y, w]`.
    #[inline]
    pub const fn to_array_w(self) -> [f64; 3] {
        [self.x, self.y, self.w]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: impl Into<Self>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: impl Into<Self>) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other` (avoids the root).
    #[inline]
    pub fn distance_squared(self, other: impl Into<Self>) -> f64 {
        let other = other.into();
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2)
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Normalizes to unit length.
    ///
    /// Lengths below [`EPSILON`] yield [`Vec2::ZERO`] instead of
    /// dividing.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length < EPSILON {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length)
    }

    /// Adds `other` in place, keeping this vector's `w`.
    #[inline]
    pub fn offset(&mut self, other: impl Into<Self>) -> &mut Self {
        let other = other.into();
        self.x += other.x;
        self.y += other.y;
        self
    }

    /// Returns the vector with both components negated.
    #[inline]
    pub fn invert(self) -> Self {
        -self
    }

    /// Rounds every component (including `w`) to the nearest integer.
    #[inline]
    pub fn round(self) -> Self {
        Self::with_w(self.x.round(), self.y.round(), self.w.round())
    }

    /// Reads this vector as polar `(radius, angle)` and converts to
    /// cartesian coordinates.
    #[inline]
    pub fn to_cartesian(self) -> Self {
        Self::new(self.x * self.y.cos(), self.x * self.y.sin())
    }

    /// Converts cartesian coordinates to polar `(radius, angle)`.
    #[inline]
    pub fn to_polar(self) -> Self {
        Self::new(self.length(), self.y.atan2(self.x))
    }

    /// Converts to a glam [`DVec2`](glam::DVec2), dropping `w`.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from a glam [`DVec2`](glam::DVec2).
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Default for Vec2 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Resolvable for Vec2 {
    type Like = Vec2Like;
    const NAME: &'static str = "Vec2";

    fn cast(like: Vec2Like) -> Option<Self> {
        match like {
            Vec2Like::Value(v) => Some(v),
            Vec2Like::ArrayW([x, y, w]) => {
                [x, y, w].iter().all(|v| is_valid_number(*v)).then(|| Self::with_w(x, y, w))
            }
            Vec2Like::Array([x, y]) => {
                (is_valid_number(x) && is_valid_number(y)).then(|| Self::new(x, y))
            }
            Vec2Like::Scalar(v) => is_valid_number(v).then(|| Self::splat(v)),
            Vec2Like::Text(text) => {
                let (xy, w) = match text.split_once(';') {
                    Some((xy, w)) => (xy, Some(w)),
                    None => (text.as_str(), None),
                };
                let [x, y] = parse_components::<2>(xy, ',')?;
                match w {
                    Some(w) => Some(Self::with_w(x, y, parse_number(w)?)),
                    None => Some(Self::new(x, y)),
                }
            }
        }
    }
}

impl fmt::Display for Vec2 {
    /// Formats as `x,y`, appending `;w` only when `w != 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)?;
        if self.w != 1.0 {
            write!(f, ";{}", self.w)?;
        }
        Ok(())
    }
}

impl FromStr for Vec2 {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

// Infallible shapes, usable directly as method arguments.

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<[f64; 3]> for Vec2 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::with_w(a[0], a[1], a[2])
    }
}

impl From<f64> for Vec2 {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> [f64; 2] {
        v.to_array()
    }
}

// Like-shape wrappers.

impl From<Vec2> for Vec2Like {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vec2Like::Value(v)
    }
}

impl From<[f64; 2]> for Vec2Like {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Vec2Like::Array(a)
    }
}

impl From<(f64, f64)> for Vec2Like {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2Like::Array([x, y])
    }
}

impl From<[f64; 3]> for Vec2Like {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Vec2Like::ArrayW(a)
    }
}

impl From<f64> for Vec2Like {
    #[inline]
    fn from(v: f64) -> Self {
        Vec2Like::Scalar(v)
    }
}

impl From<&str> for Vec2Like {
    #[inline]
    fn from(s: &str) -> Self {
        Vec2Like::Text(s.to_owned())
    }
}

impl From<String> for Vec2Like {
    #[inline]
    fn from(s: String) -> Self {
        Vec2Like::Text(s)
    }
}

// Arithmetic operators; results carry w = 1.

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Component-wise product.
impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
