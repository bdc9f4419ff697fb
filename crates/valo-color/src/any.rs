//! Either-kind color sum type.

use std::fmt;
use std::str::FromStr;

use valo_core::{Resolvable, ResolveError};

use crate::{Hsla, HslaLike, Rgba, RgbaLike};

/// A color of either kind.
///
/// Resolution accepts any color shape and keeps track of which model it
/// arrived in; ambiguous shapes (arrays, packed numbers) default to the
/// RGB interpretation unless [`cast_preferring`](Color::cast_preferring)
/// is asked for HSL.
///
/// # Example
///
/// ```rust
/// use valo_color::Color;
/// use valo_core::Resolvable;
///
/// let c = Color::resolve("hsl(0,255,128)").unwrap();
/// assert!(matches!(c, Color::Hsla(_)));
/// let c = Color::resolve("#ff0000").unwrap();
/// assert!(matches!(c, Color::Rgba(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// An RGBA color.
    Rgba(Rgba),
    /// An HSLA color.
    Hsla(Hsla),
}

/// The union of input shapes [`Color`] resolves from.
///
/// The shapes mirror [`RgbaLike`]/[`HslaLike`]; which model claims an
/// ambiguous shape is decided at cast time.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorLike {
    /// Canonical value passthrough.
    Value(Color),
    /// `[c0, c1, c2]` in 0-1, model decided by preference.
    Array([f64; 3]),
    /// `[c0, c1, c2, alpha]` in 0-1, model decided by preference.
    ArrayAlpha([f64; 4]),
    /// Packed big-endian bytes.
    Packed(f64),
    /// Hex or functional text; `rgb()`/`hsl()` prefixes pick the model.
    Text(String),
}

impl Color {
    /// Casts with the RGB interpretation preferred for ambiguous
    /// shapes.
    pub fn cast_preferring(like: ColorLike, prefer_hsl: bool) -> Option<Self> {
        match like {
            ColorLike::Value(c) => Some(c),
            ColorLike::Array(a) => {
                if prefer_hsl {
                    Hsla::cast(HslaLike::Array(a)).map(Color::Hsla)
                } else {
                    Rgba::cast(RgbaLike::Array(a)).map(Color::Rgba)
                }
            }
            ColorLike::ArrayAlpha(a) => {
                if prefer_hsl {
                    Hsla::cast(HslaLike::ArrayAlpha(a)).map(Color::Hsla)
                } else {
                    Rgba::cast(RgbaLike::ArrayAlpha(a)).map(Color::Rgba)
                }
            }
            ColorLike::Packed(v) => {
                if prefer_hsl {
                    Hsla::cast(HslaLike::Packed(v)).map(Color::Hsla)
                } else {
                    Rgba::cast(RgbaLike::Packed(v)).map(Color::Rgba)
                }
            }
            ColorLike::Text(text) => {
                let as_rgba = |t: String| Rgba::cast(RgbaLike::Text(t)).map(Color::Rgba);
                let as_hsla = |t: String| Hsla::cast(HslaLike::Text(t)).map(Color::Hsla);
                if prefer_hsl {
                    as_hsla(text.clone()).or_else(|| as_rgba(text))
                } else {
                    as_rgba(text.clone()).or_else(|| as_hsla(text))
                }
            }
        }
    }

    /// Views this color in the RGB model.
    pub fn to_rgba(&self) -> Rgba {
        match self {
            Color::Rgba(c) => *c,
            Color::Hsla(c) => c.to_rgb(),
        }
    }

    /// Views this color in the HSL model.
    pub fn to_hsla(&self) -> Hsla {
        match self {
            Color::Rgba(c) => c.to_hsl(),
            Color::Hsla(c) => *c,
        }
    }

    /// Alpha channel, whichever model the color is in.
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(c) => c.alpha(),
            Color::Hsla(c) => c.alpha(),
        }
    }
}

impl Resolvable for Color {
    type Like = ColorLike;
    const NAME: &'static str = "Color";

    fn cast(like: ColorLike) -> Option<Self> {
        Self::cast_preferring(like, false)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba(c) => c.fmt(f),
            Color::Hsla(c) => c.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<Hsla> for Color {
    #[inline]
    fn from(c: Hsla) -> Self {
        Color::Hsla(c)
    }
}

impl From<Color> for ColorLike {
    #[inline]
    fn from(c: Color) -> Self {
        ColorLike::Value(c)
    }
}

impl From<Rgba> for ColorLike {
    #[inline]
    fn from(c: Rgba) -> Self {
        ColorLike::Value(Color::Rgba(c))
    }
}

impl From<Hsla> for ColorLike {
    #[inline]
    fn from(c: Hsla) -> Self {
        ColorLike::Value(Color::Hsla(c))
    }
}

impl From<[f64; 3]> for ColorLike {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        ColorLike::Array(a)
    }
}

impl From<[f64; 4]> for ColorLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        ColorLike::ArrayAlpha(a)
    }
}

impl From<f64> for ColorLike {
    #[inline]
    fn from(v: f64) -> Self {
        ColorLike::Packed(v)
    }
}

impl From<&str> for ColorLike {
    #[inline]
    fn from(s: &str) -> Self {
        ColorLike::Text(s.to_owned())
    }
}

impl From<String> for ColorLike {
    #[inline]
    fn from(s: String) -> Self {
        ColorLike::Text(s)
    }
}
