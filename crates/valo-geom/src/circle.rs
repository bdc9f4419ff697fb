//! Circle type: a center position plus a radius.

use std::fmt;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_number};
use valo_core::{Resolvable, ResolveError};
use valo_math::{Vec2, Vec2Like};

/// A circle centered at [`position`](Circle::position).
///
/// # Example
///
/// ```rust
/// use valo_geom::Circle;
/// use valo_core::Resolvable;
///
/// let c = Circle::resolve("1,2|5").unwrap();
/// assert_eq!(c.radius, 5.0);
/// assert!(c.inside_point((1.0, 6.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center of the circle.
    pub position: Vec2,
    /// Radius.
    pub radius: f64,
}

/// The union of input shapes [`Circle`] resolves from.
///
/// Shape priority: canonical value, `[x, y, radius]`,
/// `[x, y, w, radius]`, text (`"<vec2>|radius"`). The 3-element array
/// is claimed as center-plus-radius here; [`Vec2`] reads the same
/// literal as `[x, y, w]`.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleLike {
    /// Canonical value passthrough.
    Value(Circle),
    /// `[x, y, radius]`.
    Array([f64; 3]),
    /// `[x, y, w, radius]`.
    ArrayW([f64; 4]),
    /// `"<vec2>|radius"`, e.g. `"1,2|5"`.
    Text(String),
}

impl Circle {
    /// Creates a circle from a center and a radius.
    pub fn new(position: impl Into<Vec2>, radius: f64) -> Self {
        Self {
            position: position.into(),
            radius,
        }
    }

    /// Checked constructor: fails if the center or the radius is not
    /// finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(position: Vec2, radius: f64) -> ValidationResult<Self> {
        ensure_finite(Self::NAME, "x", position.x)?;
        ensure_finite(Self::NAME, "y", position.y)?;
        ensure_finite(Self::NAME, "w", position.w)?;
        Ok(Self::new(position, ensure_finite(Self::NAME, "radius", radius)?))
    }

    /// Circumference.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Converts to `[x, y, radius]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.radius]
    }

    /// Converts to `[x, y, w, radius]`.
    #[inline]
    pub fn to_array_w(&self) -> [f64; 4] {
        [self.position.x, self.position.y, self.position.w, self.radius]
    }

    /// Returns `true` if this circle and `other` touch or overlap.
    pub fn inside(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.position.distance(other.position) <= self.radius + other.radius
    }

    /// Returns `true` if the point lies in the circle (inclusive).
    pub fn inside_point(&self, point: impl Into<Vec2>) -> bool {
        self.position.distance(point) <= self.radius
    }
}

impl Resolvable for Circle {
    type Like = CircleLike;
    const NAME: &'static str = "Circle";

    fn cast(like: CircleLike) -> Option<Self> {
        match like {
            CircleLike::Value(c) => Some(c),
            CircleLike::ArrayW(a) => a.iter().all(|v| is_valid_number(*v)).then(|| {
                Self::new(Vec2::with_w(a[0], a[1], a[2]), a[3])
            }),
            CircleLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::new((a[0], a[1]), a[2])),
            CircleLike::Text(text) => {
                let (pos, radius) = text.split_once('|')?;
                let position = Vec2::cast(Vec2Like::Text(pos.to_owned()))?;
                Some(Self::new(position, parse_number(radius)?))
            }
        }
    }
}

impl fmt::Display for Circle {
    /// Formats as `<vec2>|radius`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.position, self.radius)
    }
}

impl FromStr for Circle {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

// Infallible shapes.

impl From<[f64; 3]> for Circle {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new((a[0], a[1]), a[2])
    }
}

impl From<((f64, f64), f64)> for Circle {
    #[inline]
    fn from((center, radius): ((f64, f64), f64)) -> Self {
        Self::new(center, radius)
    }
}

impl From<(Vec2, f64)> for Circle {
    #[inline]
    fn from((center, radius): (Vec2, f64)) -> Self {
        Self::new(center, radius)
    }
}

// Like-shape wrappers.

impl From<Circle> for CircleLike {
    #[inline]
    fn from(c: Circle) -> Self {
        CircleLike::Value(c)
    }
}

impl From<[f64; 3]> for CircleLike {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        CircleLike::Array(a)
    }
}

impl From<[f64; 4]> for CircleLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        CircleLike::ArrayW(a)
    }
}

impl From<&str> for CircleLike {
    #[inline]
    fn from(s: &str) -> Self {
        CircleLike::Text(s.to_owned())
    }
}

impl From<String> for CircleLike {
    #[inline]
    fn from(s: String) -> Self {
        CircleLike::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_metrics() {
        let c = Circle::new((0.0, 0.0), 2.0);
        assert_relative_eq!(c.area(), 4.0 * std::f64::consts::PI);
        assert_relative_eq!(c.perimeter(), 4.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_circle_try_new() {
        assert!(Circle::try_new(Vec2::new(0.0, 0.0), 1.0).is_ok());
        let err = Circle::try_new(Vec2::new(0.0, 0.0), f64::NAN).unwrap_err();
        assert!(err.to_string().contains("Circle.radius"));
    }

    #[test]
    fn test_circle_inside_point() {
        let c = Circle::new((1.0, 1.0), 2.0);
        assert!(c.inside_point((1.0, 3.0))); // on the rim
        assert!(c.inside_point((2.0, 2.0)));
        assert!(!c.inside_point((4.0, 4.0)));
    }

    #[test]
    fn test_circle_inside_circle() {
        let c = Circle::new((0.0, 0.0), 2.0);
        assert!(c.inside(((3.0, 0.0), 1.0))); // touching
        assert!(!c.inside(((3.1, 0.0), 1.0)));
    }

    #[test]
    fn test_circle_resolve_shapes() {
        let expected = Circle::new((1.0, 2.0), 5.0);
        assert_eq!(Circle::resolve("1,2|5").unwrap(), expected);
        assert_eq!(Circle::resolve([1.0, 2.0, 5.0]).unwrap(), expected);

        let with_w = Circle::resolve([1.0, 2.0, 0.5, 5.0]).unwrap();
        assert_eq!(with_w.position, Vec2::with_w(1.0, 2.0, 0.5));
        assert_eq!(with_w.radius, 5.0);
    }

    #[test]
    fn test_circle_resolve_failure() {
        let err = Circle::resolve("1,2").unwrap_err();
        assert_eq!(err.target, "Circle");
        assert!(Circle::resolve("1,2|r").is_err());
    }

    #[test]
    fn test_circle_display_roundtrip() {
        let c = Circle::new((1.5, -2.0), 4.25);
        assert_eq!(c.to_string(), "1.5,-2|4.25");
        assert_eq!(Circle::resolve(c.to_string()).unwrap(), c);
        assert_eq!(Circle::resolve(c.to_array()).unwrap(), c);
    }
}
