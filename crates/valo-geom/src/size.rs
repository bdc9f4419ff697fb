//! 2D extent type.

use std::fmt;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_components};
use valo_core::{Resolvable, ResolveError};
use valo_math::{Vec2, Vec2Like};

/// A width/height pair.
///
/// # Example
///
/// ```rust
/// use valo_geom::Size;
/// use valo_core::Resolvable;
///
/// let size = Size::resolve("640x480").unwrap();
/// assert_eq!(size.area(), 640.0 * 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// The union of input shapes [`Size`] resolves from.
///
/// Shape priority: canonical value, `[width, height]`, scalar broadcast
/// (a square), text (`"WxH"`). Delegates: [`Vec2`] reads as
/// `(x, y)`, [`BoundingBox`](crate::BoundingBox) contributes its
/// extent.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeLike {
    /// Canonical value passthrough.
    Value(Size),
    /// `[width, height]`.
    Array([f64; 2]),
    /// `"WxH"`, e.g. `"640x480"`.
    Text(String),
    /// Scalar broadcast to both extents.
    Scalar(f64),
}

impl Size {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Checked constructor: fails if either extent is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(width: f64, height: f64) -> ValidationResult<Self> {
        Ok(Self::new(
            ensure_finite(Self::NAME, "width", width)?,
            ensure_finite(Self::NAME, "height", height)?,
        ))
    }

    /// Height over width.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter of the rectangle this size spans.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Converts to `[width, height]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.width, self.height]
    }

    /// Reads the extents as a vector.
    #[inline]
    pub const fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Resolvable for Size {
    type Like = SizeLike;
    const NAME: &'static str = "Size";

    fn cast(like: SizeLike) -> Option<Self> {
        match like {
            SizeLike::Value(s) => Some(s),
            SizeLike::Array([w, h]) => {
                (is_valid_number(w) && is_valid_number(h)).then(|| Self::new(w, h))
            }
            SizeLike::Scalar(v) => is_valid_number(v).then(|| Self::splat(v)),
            SizeLike::Text(text) => {
                let [w, h] = parse_components::<2>(&text, 'x')?;
                Some(Self::new(w, h))
            }
        }
    }
}

impl fmt::Display for Size {
    /// Formats as `WxH`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

// Infallible shapes.

impl From<(f64, f64)> for Size {
    #[inline]
    fn from((w, h): (f64, f64)) -> Self {
        Self::new(w, h)
    }
}

impl From<[f64; 2]> for Size {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<f64> for Size {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<Vec2> for Size {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// Like-shape wrappers.

impl From<Size> for SizeLike {
    #[inline]
    fn from(s: Size) -> Self {
        SizeLike::Value(s)
    }
}

impl From<[f64; 2]> for SizeLike {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        SizeLike::Array(a)
    }
}

impl From<(f64, f64)> for SizeLike {
    #[inline]
    fn from((w, h): (f64, f64)) -> Self {
        SizeLike::Array([w, h])
    }
}

impl From<f64> for SizeLike {
    #[inline]
    fn from(v: f64) -> Self {
        SizeLike::Scalar(v)
    }
}

impl From<&str> for SizeLike {
    #[inline]
    fn from(s: &str) -> Self {
        SizeLike::Text(s.to_owned())
    }
}

impl From<String> for SizeLike {
    #[inline]
    fn from(s: String) -> Self {
        SizeLike::Text(s)
    }
}

// Delegate conversions across the graph.

impl From<Vec2> for SizeLike {
    #[inline]
    fn from(v: Vec2) -> Self {
        SizeLike::Array([v.x, v.y])
    }
}

impl From<Size> for Vec2Like {
    #[inline]
    fn from(s: Size) -> Self {
        Vec2Like::Array(s.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_metrics() {
        let s = Size::new(4.0, 2.0);
        assert_eq!(s.area(), 8.0);
        assert_eq!(s.perimeter(), 12.0);
        assert_eq!(s.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_size_try_new() {
        assert!(Size::try_new(1.0, 2.0).is_ok());
        assert!(Size::try_new(f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_size_resolve_shapes() {
        let expected = Size::new(640.0, 480.0);
        assert_eq!(Size::resolve("640x480").unwrap(), expected);
        assert_eq!(Size::resolve([640.0, 480.0]).unwrap(), expected);
        assert_eq!(Size::resolve(8.0).unwrap(), Size::splat(8.0));
        assert_eq!(Size::resolve(Vec2::new(640.0, 480.0)).unwrap(), expected);
    }

    #[test]
    fn test_size_resolve_failure() {
        let err = Size::resolve("640,480").unwrap_err();
        assert_eq!(err.target, "Size");
    }

    #[test]
    fn test_size_display_roundtrip() {
        let s = Size::new(12.5, 8.0);
        assert_eq!(s.to_string(), "12.5x8");
        assert_eq!(Size::resolve(s.to_string()).unwrap(), s);
        assert_eq!(Size::resolve(s.to_array()).unwrap(), s);
    }

    #[test]
    fn test_size_vec2_roundtrip() {
        let s = Size::new(3.0, 4.0);
        assert_eq!(Size::from(s.to_vec2()), s);
    }
}
