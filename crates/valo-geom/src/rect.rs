//! Rectangle type: a position plus a size.

use std::fmt;
use std::str::FromStr;

use valo_core::probe::is_valid_number;
use valo_core::{Resolvable, ResolveError};
use valo_math::{Vec2, Vec2Like};

use crate::{BoundingBox, Size, SizeLike};

/// A rectangle anchored at [`position`](Rectangle::position) spanning
/// [`size`](Rectangle::size).
///
/// The embedded [`Vec2`] and [`Size`] are exclusively owned; resolving
/// or constructing always copies the incoming data.
///
/// # Example
///
/// ```rust
/// use valo_geom::Rectangle;
/// use valo_core::Resolvable;
///
/// let rect = Rectangle::resolve("1,2|10x20").unwrap();
/// assert_eq!(rect.x(), 1.0);
/// assert_eq!(rect.height(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Anchor corner (top-left in screen coordinates).
    pub position: Vec2,
    /// Extent from the anchor.
    pub size: Size,
}

/// The union of input shapes [`Rectangle`] resolves from.
///
/// Shape priority: canonical value, `[x, y, width, height]`,
/// `[x, y, w, width, height]` (with the position's homogeneous
/// component), text (`"<vec2>|<size>"`). Delegate: a
/// [`BoundingBox`] converts through its edge mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum RectangleLike {
    /// Canonical value passthrough.
    Value(Rectangle),
    /// `[x, y, width, height]`.
    Array([f64; 4]),
    /// `[x, y, w, width, height]`.
    ArrayW([f64; 5]),
    /// `"<vec2>|<size>"`, e.g. `"0,0|10x10"`.
    Text(String),
}

impl Rectangle {
    /// Creates a rectangle from a position and a size.
    pub fn new(position: impl Into<Vec2>, size: impl Into<Size>) -> Self {
        Self {
            position: position.into(),
            size: size.into(),
        }
    }

    /// Anchor x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Anchor y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.size.area()
    }

    /// Perimeter length.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.size.perimeter()
    }

    /// Converts to `[x, y, width, height]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x(), self.y(), self.width(), self.height()]
    }

    /// Converts to the edge representation.
    ///
    /// The mapping is `left = x`, `right = x + width`, `top = y`,
    /// `bottom = y + height`; it round-trips exactly with
    /// [`BoundingBox::to_rectangle`].
    pub fn to_bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.x(),
            self.x() + self.width(),
            self.y(),
            self.y() + self.height(),
        )
    }
}

impl Resolvable for Rectangle {
    type Like = RectangleLike;
    const NAME: &'static str = "Rectangle";

    fn cast(like: RectangleLike) -> Option<Self> {
        match like {
            RectangleLike::Value(r) => Some(r),
            RectangleLike::ArrayW(a) => {
                a.iter().all(|v| is_valid_number(*v)).then(|| {
                    Self::new(Vec2::with_w(a[0], a[1], a[2]), (a[3], a[4]))
                })
            }
            RectangleLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::new((a[0], a[1]), (a[2], a[3]))),
            RectangleLike::Text(text) => {
                let (pos, size) = text.split_once('|')?;
                let position = Vec2::cast(Vec2Like::Text(pos.to_owned()))?;
                let size = Size::cast(SizeLike::Text(size.to_owned()))?;
                Some(Self::new(position, size))
            }
        }
    }
}

impl fmt::Display for Rectangle {
    /// Formats as `<vec2>|<size>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.position, self.size)
    }
}

impl FromStr for Rectangle {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<[f64; 4]> for Rectangle {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::new((a[0], a[1]), (a[2], a[3]))
    }
}

impl From<Rectangle> for RectangleLike {
    #[inline]
    fn from(r: Rectangle) -> Self {
        RectangleLike::Value(r)
    }
}

impl From<[f64; 4]> for RectangleLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        RectangleLike::Array(a)
    }
}

impl From<[f64; 5]> for RectangleLike {
    #[inline]
    fn from(a: [f64; 5]) -> Self {
        RectangleLike::ArrayW(a)
    }
}

impl From<&str> for RectangleLike {
    #[inline]
    fn from(s: &str) -> Self {
        RectangleLike::Text(s.to_owned())
    }
}

impl From<String> for RectangleLike {
    #[inline]
    fn from(s: String) -> Self {
        RectangleLike::Text(s)
    }
}

// Delegate conversion: a BoundingBox resolves as the rectangle it
// encloses.

impl From<BoundingBox> for RectangleLike {
    #[inline]
    fn from(b: BoundingBox) -> Self {
        RectangleLike::Value(b.to_rectangle())
    }
}
