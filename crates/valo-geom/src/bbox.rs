//! Axis-aligned bounding box stored as its four edges.

use std::fmt;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::{is_valid_number, parse_components};
use valo_core::{Resolvable, ResolveError};
use valo_math::Vec2;

use crate::{Circle, Rectangle, Size, SizeLike};

/// An axis-aligned box described by its `left`, `right`, `top` and
/// `bottom` edges.
///
/// No ordering is enforced between opposing edges; a box with
/// `left > right` simply has a negative [`width`](BoundingBox::width).
///
/// # Example
///
/// ```rust
/// use valo_geom::BoundingBox;
/// use valo_core::Resolvable;
///
/// let bbox = BoundingBox::resolve("0,10,0,20").unwrap();
/// assert_eq!(bbox.width(), 10.0);
/// assert_eq!(bbox.height(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct BoundingBox {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// The union of input shapes [`BoundingBox`] resolves from.
///
/// Shape priority: canonical value, `[left, right, top, bottom]`, text
/// (same order, comma-separated). Delegate: a [`Rectangle`] converts
/// through its edge mapping. Note the component order differs from
/// `Rectangle`'s `[x, y, width, height]` for the same array length.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundingBoxLike {
    /// Canonical value passthrough.
    Value(BoundingBox),
    /// `[left, right, top, bottom]`.
    Array([f64; 4]),
    /// `"left,right,top,bottom"`.
    Text(String),
}

impl BoundingBox {
    /// Creates a bounding box from its four edges.
    #[inline]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Checked constructor: fails if any edge is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending field.
    pub fn try_new(left: f64, right: f64, top: f64, bottom: f64) -> ValidationResult<Self> {
        Ok(Self::new(
            ensure_finite(Self::NAME, "left", left)?,
            ensure_finite(Self::NAME, "right", right)?,
            ensure_finite(Self::NAME, "top", top)?,
            ensure_finite(Self::NAME, "bottom", bottom)?,
        ))
    }

    /// Horizontal extent (`right - left`).
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent (`bottom - top`).
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Moves the right edge so the box spans `width`.
    #[inline]
    pub fn set_width(&mut self, width: f64) {
        self.right = self.left + width;
    }

    /// Moves the bottom edge so the box spans `height`.
    #[inline]
    pub fn set_height(&mut self, height: f64) {
        self.bottom = self.top + height;
    }

    /// Converts to `[left, right, top, bottom]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.left, self.right, self.top, self.bottom]
    }

    /// Converts to the anchored representation.
    ///
    /// Inverse of [`Rectangle::to_bounding_box`]; the pair round-trips
    /// exactly.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new((self.left, self.top), (self.width(), self.height()))
    }

    /// Reads the extent as a [`Size`].
    #[inline]
    pub fn to_size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns `true` if this box and `other` overlap (edges touching
    /// counts).
    pub fn inside(&self, other: impl Into<Self>) -> bool {
        let b = other.into();
        self.right >= b.left && b.right >= self.left && self.bottom >= b.top && b.bottom >= self.top
    }

    /// Returns `true` if the point lies inside the box (inclusive).
    pub fn inside_point(&self, point: impl Into<Vec2>) -> bool {
        let p = point.into();
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    /// Returns `true` if `circle` overlaps this box.
    ///
    /// Closest-point test: the vector from the box center to the circle
    /// center is clamped into the half-extent range; the circle overlaps
    /// iff that clamped point lies strictly within the radius. Plain
    /// axis-interval checks miss the corner cases this covers.
    pub fn inside_circle(&self, circle: impl Into<Circle>) -> bool {
        let circle = circle.into();
        let center = circle.position;
        let half_extent = Vec2::new(self.width() / 2.0, self.height() / 2.0);
        let box_center = Vec2::new(self.left + half_extent.x, self.top + half_extent.y);
        let delta = center - box_center;
        let clamped = Vec2::clamp(delta, -half_extent, half_extent);
        let closest = box_center + clamped;
        (closest - center).length() < circle.radius
    }
}

impl Resolvable for BoundingBox {
    type Like = BoundingBoxLike;
    const NAME: &'static str = "BoundingBox";

    fn cast(like: BoundingBoxLike) -> Option<Self> {
        match like {
            BoundingBoxLike::Value(b) => Some(b),
            BoundingBoxLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::new(a[0], a[1], a[2], a[3])),
            BoundingBoxLike::Text(text) => {
                let [l, r, t, b] = parse_components::<4>(&text, ',')?;
                Some(Self::new(l, r, t, b))
            }
        }
    }
}

impl fmt::Display for BoundingBox {
    /// Formats as `left,right,top,bottom`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.right, self.top, self.bottom)
    }
}

impl FromStr for BoundingBox {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<[f64; 4]> for BoundingBox {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    #[inline]
    fn from((l, r, t, b): (f64, f64, f64, f64)) -> Self {
        Self::new(l, r, t, b)
    }
}

impl From<Rectangle> for BoundingBox {
    #[inline]
    fn from(r: Rectangle) -> Self {
        r.to_bounding_box()
    }
}

impl From<BoundingBox> for BoundingBoxLike {
    #[inline]
    fn from(b: BoundingBox) -> Self {
        BoundingBoxLike::Value(b)
    }
}

impl From<[f64; 4]> for BoundingBoxLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        BoundingBoxLike::Array(a)
    }
}

impl From<&str> for BoundingBoxLike {
    #[inline]
    fn from(s: &str) -> Self {
        BoundingBoxLike::Text(s.to_owned())
    }
}

impl From<String> for BoundingBoxLike {
    #[inline]
    fn from(s: String) -> Self {
        BoundingBoxLike::Text(s)
    }
}

// Delegate conversions.

impl From<Rectangle> for BoundingBoxLike {
    #[inline]
    fn from(r: Rectangle) -> Self {
        BoundingBoxLike::Value(r.to_bounding_box())
    }
}

impl From<BoundingBox> for SizeLike {
    #[inline]
    fn from(b: BoundingBox) -> Self {
        SizeLike::Value(b.to_size())
    }
}
