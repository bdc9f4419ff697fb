//! RGBA color value type.

use std::fmt;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::is_valid_number;
use valo_core::scalar::clamp01;
use valo_core::{Resolvable, ResolveError};
use valo_math::{Vec2, Vec3};

use crate::{parse_functional, parse_hex, unpack_number, Hsla};

/// An RGBA color with every channel clamped to [0, 1].
///
/// Values are immutable; use the `with_*` methods to derive an updated
/// color. Checked construction validates finiteness *before* clamping,
/// so a NaN channel is a [`ValidationError`](valo_core::ValidationError)
/// while an out-of-range one just saturates.
///
/// # Example
///
/// ```rust
/// use valo_color::Rgba;
///
/// let c = Rgba::new(1.5, 0.25, -2.0, 1.0).unwrap();
/// assert_eq!(c.red(), 1.0);   // clamped
/// assert_eq!(c.blue(), 0.0);  // clamped
/// let faded = c.with_alpha(0.5);
/// assert_eq!(faded.alpha(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

/// The union of input shapes [`Rgba`] resolves from.
///
/// Shape priority: canonical value, `[r, g, b, a]`, `[r, g, b]`
/// (channels 0-1), packed number, text (hex or `rgb()`/`rgba()`
/// functional). Delegates: [`Hsla`] converts through
/// [`Hsla::to_rgb`], [`Vec3`] contributes its normalized components.
/// A 3-element array is an RGB triple for this target; [`Vec2`] reads
/// the same literal as `[x, y, w]`.
#[derive(Debug, Clone, PartialEq)]
pub enum RgbaLike {
    /// Canonical value passthrough.
    Value(Rgba),
    /// `[red, green, blue]` in 0-1.
    Array([f64; 3]),
    /// `[red, green, blue, alpha]` in 0-1.
    ArrayAlpha([f64; 4]),
    /// Packed big-endian bytes; magnitude picks RGB vs RGBA.
    Packed(f64),
    /// Hex (`#`/`$`/`0x`) or functional (`rgb()`/`rgba()`) text.
    Text(String),
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Checked constructor: validates finiteness, then clamps every
    /// channel to [0, 1].
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the first
    /// non-finite channel.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> ValidationResult<Self> {
        Ok(Self::from_clamped(
            ensure_finite(Self::NAME, "red", red)?,
            ensure_finite(Self::NAME, "green", green)?,
            ensure_finite(Self::NAME, "blue", blue)?,
            ensure_finite(Self::NAME, "alpha", alpha)?,
        ))
    }

    /// Checked constructor for an opaque color (`alpha = 1`).
    ///
    /// # Errors
    ///
    /// See [`Rgba::new`].
    pub fn opaque(red: f64, green: f64, blue: f64) -> ValidationResult<Self> {
        Self::new(red, green, blue, 1.0)
    }

    /// Clamping constructor for channels already known finite.
    pub(crate) fn from_clamped(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp01(red),
            green: clamp01(green),
            blue: clamp01(blue),
            alpha: clamp01(alpha),
        }
    }

    /// Red channel.
    #[inline]
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the color with the red channel replaced (clamped).
    #[inline]
    pub fn with_red(self, red: f64) -> Self {
        Self {
            red: clamp01(red),
            ..self
        }
    }

    /// Returns the color with the green channel replaced (clamped).
    #[inline]
    pub fn with_green(self, green: f64) -> Self {
        Self {
            green: clamp01(green),
            ..self
        }
    }

    /// Returns the color with the blue channel replaced (clamped).
    #[inline]
    pub fn with_blue(self, blue: f64) -> Self {
        Self {
            blue: clamp01(blue),
            ..self
        }
    }

    /// Returns the color with the alpha channel replaced (clamped).
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp01(alpha),
            ..self
        }
    }

    /// Converts to `[red, green, blue]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Converts to `[red, green, blue, alpha]`.
    #[inline]
    pub const fn to_array_alpha(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Converts to HSL, carrying alpha through.
    ///
    /// Pure gray has no defined hue; by convention both hue and
    /// saturation come out 0 there.
    pub fn to_hsl(&self) -> Hsla {
        let (r, g, b) = (self.red, self.green, self.blue);
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let luminance = (min + max) / 2.0;
        if min == max {
            return Hsla::from_clamped(0.0, 0.0, luminance, self.alpha);
        }
        let d = max - min;
        let saturation = if luminance > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let hue = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        Hsla::from_clamped(hue, saturation, luminance, self.alpha)
    }

    /// Reads the channels as a vector: `(red, green)` with blue in the
    /// homogeneous slot.
    #[inline]
    pub const fn to_vec2(&self) -> Vec2 {
        Vec2::with_w(self.red, self.green, self.blue)
    }

    /// Reads the channels as a vector: `(red, green, blue)` with alpha
    /// in the homogeneous slot.
    #[inline]
    pub const fn to_vec3(&self) -> Vec3 {
        Vec3::with_w(self.red, self.green, self.blue, self.alpha)
    }

    /// Returns the complementary color; alpha is untouched.
    #[inline]
    pub fn invert(&self) -> Self {
        Self::from_clamped(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue, self.alpha)
    }
}

impl Resolvable for Rgba {
    type Like = RgbaLike;
    const NAME: &'static str = "Rgba";

    fn cast(like: RgbaLike) -> Option<Self> {
        match like {
            RgbaLike::Value(c) => Some(c),
            RgbaLike::ArrayAlpha(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_clamped(a[0], a[1], a[2], a[3])),
            RgbaLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_clamped(a[0], a[1], a[2], 1.0)),
            RgbaLike::Packed(v) => {
                let [r, g, b, a] = unpack_number(v)?;
                Some(Self::from_clamped(r, g, b, a))
            }
            RgbaLike::Text(text) => {
                let [r, g, b, a] =
                    parse_hex(&text).or_else(|| parse_functional(&text, "rgb"))?;
                Some(Self::from_clamped(r, g, b, a))
            }
        }
    }
}

impl fmt::Display for Rgba {
    /// Formats as `rgb(r,g,b)` with 0-255 integer channels, switching
    /// to `rgba(r,g,b,a)` with a float alpha when alpha is not 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |v: f64| (v * 255.0).round() as u8;
        if self.alpha == 1.0 {
            write!(
                f,
                "rgb({},{},{})",
                byte(self.red),
                byte(self.green),
                byte(self.blue)
            )
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                byte(self.red),
                byte(self.green),
                byte(self.blue),
                self.alpha
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<Rgba> for RgbaLike {
    #[inline]
    fn from(c: Rgba) -> Self {
        RgbaLike::Value(c)
    }
}

impl From<[f64; 3]> for RgbaLike {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        RgbaLike::Array(a)
    }
}

impl From<[f64; 4]> for RgbaLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        RgbaLike::ArrayAlpha(a)
    }
}

impl From<f64> for RgbaLike {
    #[inline]
    fn from(v: f64) -> Self {
        RgbaLike::Packed(v)
    }
}

impl From<&str> for RgbaLike {
    #[inline]
    fn from(s: &str) -> Self {
        RgbaLike::Text(s.to_owned())
    }
}

impl From<String> for RgbaLike {
    #[inline]
    fn from(s: String) -> Self {
        RgbaLike::Text(s)
    }
}

// Delegate conversions across the graph.

impl From<Hsla> for RgbaLike {
    #[inline]
    fn from(c: Hsla) -> Self {
        RgbaLike::Value(c.to_rgb())
    }
}

impl From<Vec3> for RgbaLike {
    #[inline]
    fn from(v: Vec3) -> Self {
        RgbaLike::Array(v.to_rgb())
    }
}
