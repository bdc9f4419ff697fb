//! HSLA color value type.

use std::fmt;
use std::str::FromStr;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::probe::is_valid_number;
use valo_core::scalar::clamp01;
use valo_core::{Resolvable, ResolveError};
use valo_math::{Vec2, Vec3};

use crate::{parse_functional, parse_hex, unpack_number, Rgba};

/// An HSLA color with every channel clamped to [0, 1].
///
/// Hue is stored as a fraction of a full turn, not in degrees. Like
/// [`Rgba`], values are immutable and updated through `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    hue: f64,
    saturation: f64,
    luminance: f64,
    alpha: f64,
}

/// The union of input shapes [`Hsla`] resolves from.
///
/// Shape priority: canonical value, `[h, s, l, a]`, `[h, s, l]`
/// (channels 0-1), packed number, text (`hsl()`/`hsla()` functional or
/// hex). Packed and hex inputs decode to RGB bytes and convert through
/// [`Rgba::to_hsl`]. Delegates: [`Rgba`] and [`Vec3`].
#[derive(Debug, Clone, PartialEq)]
pub enum HslaLike {
    /// Canonical value passthrough.
    Value(Hsla),
    /// `[hue, saturation, luminance]` in 0-1.
    Array([f64; 3]),
    /// `[hue, saturation, luminance, alpha]` in 0-1.
    ArrayAlpha([f64; 4]),
    /// Packed big-endian RGB(A) bytes.
    Packed(f64),
    /// Functional (`hsl()`/`hsla()`) or hex text.
    Text(String),
}

impl Hsla {
    /// Checked constructor: validates finiteness, then clamps every
    /// channel to [0, 1].
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the first
    /// non-finite channel.
    pub fn new(hue: f64, saturation: f64, luminance: f64, alpha: f64) -> ValidationResult<Self> {
        Ok(Self::from_clamped(
            ensure_finite(Self::NAME, "hue", hue)?,
            ensure_finite(Self::NAME, "saturation", saturation)?,
            ensure_finite(Self::NAME, "luminance", luminance)?,
            ensure_finite(Self::NAME, "alpha", alpha)?,
        ))
    }

    /// Checked constructor for an opaque color (`alpha = 1`).
    ///
    /// # Errors
    ///
    /// See [`Hsla::new`].
    pub fn opaque(hue: f64, saturation: f64, luminance: f64) -> ValidationResult<Self> {
        Self::new(hue, saturation, luminance, 1.0)
    }

    /// Clamping constructor for channels already known finite.
    pub(crate) fn from_clamped(hue: f64, saturation: f64, luminance: f64, alpha: f64) -> Self {
        Self {
            hue: clamp01(hue),
            saturation: clamp01(saturation),
            luminance: clamp01(luminance),
            alpha: clamp01(alpha),
        }
    }

    /// Hue channel (fraction of a full turn).
    #[inline]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation channel.
    #[inline]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Luminance channel.
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the color with the hue replaced (clamped).
    #[inline]
    pub fn with_hue(self, hue: f64) -> Self {
        Self {
            hue: clamp01(hue),
            ..self
        }
    }

    /// Returns the color with the saturation replaced (clamped).
    #[inline]
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self {
            saturation: clamp01(saturation),
            ..self
        }
    }

    /// Returns the color with the luminance replaced (clamped).
    #[inline]
    pub fn with_luminance(self, luminance: f64) -> Self {
        Self {
            luminance: clamp01(luminance),
            ..self
        }
    }

    /// Returns the color with the alpha replaced (clamped).
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp01(alpha),
            ..self
        }
    }

    /// Converts to `[hue, saturation, luminance]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.luminance]
    }

    /// Converts to `[hue, saturation, luminance, alpha]`.
    #[inline]
    pub const fn to_array_alpha(&self) -> [f64; 4] {
        [self.hue, self.saturation, self.luminance, self.alpha]
    }

    /// Converts to RGB, carrying alpha through.
    ///
    /// Zero saturation short-circuits to the gray of the luminance;
    /// otherwise the standard q/p hue ramp runs per channel, entirely
    /// in the 0-1 domain.
    pub fn to_rgb(&self) -> Rgba {
        if self.saturation == 0.0 {
            return Rgba::from_clamped(self.luminance, self.luminance, self.luminance, self.alpha);
        }
        let q = if self.luminance < 0.5 {
            self.luminance * (1.0 + self.saturation)
        } else {
            self.luminance + self.saturation - self.luminance * self.saturation
        };
        let p = 2.0 * self.luminance - q;
        let ramp = |t: f64| {
            let t = if t < 0.0 {
                t + 1.0
            } else if t > 1.0 {
                t - 1.0
            } else {
                t
            };
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };
        Rgba::from_clamped(
            ramp(self.hue + 1.0 / 3.0),
            ramp(self.hue),
            ramp(self.hue - 1.0 / 3.0),
            self.alpha,
        )
    }

    /// Reads the channels as a vector: `(hue, saturation)` with
    /// luminance in the homogeneous slot.
    #[inline]
    pub const fn to_vec2(&self) -> Vec2 {
        Vec2::with_w(self.hue, self.saturation, self.luminance)
    }

    /// Reads the channels as a vector: `(hue, saturation, luminance)`
    /// with alpha in the homogeneous slot.
    #[inline]
    pub const fn to_vec3(&self) -> Vec3 {
        Vec3::with_w(self.hue, self.saturation, self.luminance, self.alpha)
    }

    /// Returns the channel-wise complement; alpha is untouched.
    #[inline]
    pub fn invert(&self) -> Self {
        Self::from_clamped(
            1.0 - self.hue,
            1.0 - self.saturation,
            1.0 - self.luminance,
            self.alpha,
        )
    }
}

impl Resolvable for Hsla {
    type Like = HslaLike;
    const NAME: &'static str = "Hsla";

    fn cast(like: HslaLike) -> Option<Self> {
        match like {
            HslaLike::Value(c) => Some(c),
            HslaLike::ArrayAlpha(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_clamped(a[0], a[1], a[2], a[3])),
            HslaLike::Array(a) => a
                .iter()
                .all(|v| is_valid_number(*v))
                .then(|| Self::from_clamped(a[0], a[1], a[2], 1.0)),
            HslaLike::Packed(v) => {
                let [r, g, b, a] = unpack_number(v)?;
                Some(Rgba::from_clamped(r, g, b, a).to_hsl())
            }
            HslaLike::Text(text) => {
                if let Some([h, s, l, a]) = parse_functional(&text, "hsl") {
                    return Some(Self::from_clamped(h, s, l, a));
                }
                let [r, g, b, a] = parse_hex(&text)?;
                Some(Rgba::from_clamped(r, g, b, a).to_hsl())
            }
        }
    }
}

impl fmt::Display for Hsla {
    /// Formats as `hsl(h,s,l)` with 0-255 integer channels, switching
    /// to `hsla(h,s,l,a)` with a float alpha when alpha is not 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |v: f64| (v * 255.0).round() as u8;
        if self.alpha == 1.0 {
            write!(
                f,
                "hsl({},{},{})",
                byte(self.hue),
                byte(self.saturation),
                byte(self.luminance)
            )
        } else {
            write!(
                f,
                "hsla({},{},{},{})",
                byte(self.hue),
                byte(self.saturation),
                byte(self.luminance),
                self.alpha
            )
        }
    }
}

impl FromStr for Hsla {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl From<Hsla> for HslaLike {
    #[inline]
    fn from(c: Hsla) -> Self {
        HslaLike::Value(c)
    }
}

impl From<[f64; 3]> for HslaLike {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        HslaLike::Array(a)
    }
}

impl From<[f64; 4]> for HslaLike {
    #[inline]
    fn from(a: [f64; 4]) -> Self {
        HslaLike::ArrayAlpha(a)
    }
}

impl From<f64> for HslaLike {
    #[inline]
    fn from(v: f64) -> Self {
        HslaLike::Packed(v)
    }
}

impl From<&str> for HslaLike {
    #[inline]
    fn from(s: &str) -> Self {
        HslaLike::Text(s.to_owned())
    }
}

impl From<String> for HslaLike {
    #[inline]
    fn from(s: String) -> Self {
        HslaLike::Text(s)
    }
}

// Delegate conversions across the graph.

impl From<Rgba> for HslaLike {
    #[inline]
    fn from(c: Rgba) -> Self {
        HslaLike::Value(c.to_hsl())
    }
}

impl From<Vec3> for HslaLike {
    #[inline]
    fn from(v: Vec3) -> Self {
        HslaLike::Array(v.to_hsl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hsla_clamps_on_construction() {
        let c = Hsla::new(2.0, -1.0, 0.5, 1.0).unwrap();
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_hsla_rejects_non_finite() {
        let err = Hsla::new(f64::NAN, 0.0, 0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("Hsla.hue"));
    }

    #[test]
    fn test_hsla_to_rgb_primaries() {
        // Hue 0, full saturation, half luminance is pure red.
        let red = Hsla::opaque(0.0, 1.0, 0.5).unwrap().to_rgb();
        assert_relative_eq!(red.red(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(red.green(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(red.blue(), 0.0, epsilon = 1e-12);

        // A third of a turn lands on green.
        let green = Hsla::opaque(1.0 / 3.0, 1.0, 0.5).unwrap().to_rgb();
        assert_relative_eq!(green.green(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(green.red(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hsla_gray_convention() {
        let gray = Rgba::opaque(0.5, 0.5, 0.5).unwrap().to_hsl();
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        assert_eq!(gray.luminance(), 0.5);
    }

    #[test]
    fn test_hsla_rgb_roundtrip() {
        let samples = [
            [0.8, 0.2, 0.1],
            [0.0, 0.0, 1.0],
            [0.3, 0.7, 0.4],
            [1.0, 1.0, 0.0],
        ];
        for [r, g, b] in samples {
            let rgb = Rgba::opaque(r, g, b).unwrap();
            let back = rgb.to_hsl().to_rgb();
            assert_relative_eq!(back.red(), r, epsilon = 1e-9);
            assert_relative_eq!(back.green(), g, epsilon = 1e-9);
            assert_relative_eq!(back.blue(), b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hsla_resolve_functional() {
        let c = Hsla::resolve("hsla(128,255,64,0.5)").unwrap();
        assert_relative_eq!(c.hue(), 128.0 / 255.0);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.alpha(), 0.5);
        assert!(Hsla::resolve("rgb(255,0,0)").is_err());
    }

    #[test]
    fn test_hsla_resolve_hex_converts() {
        // Hex decodes to RGB bytes and converts; pure red sits at hue 0
        // with full saturation.
        let c = Hsla::resolve("#ff0000").unwrap();
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.saturation(), 1.0);
        assert_relative_eq!(c.luminance(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_hsla_resolve_failure() {
        let err = Hsla::resolve("nope").unwrap_err();
        assert_eq!(err.target, "Hsla");
    }

    #[test]
    fn test_hsla_display_roundtrip() {
        let c = Hsla::resolve([1.0, 0.0, 120.0 / 255.0]).unwrap();
        assert_eq!(c.to_string(), "hsl(255,0,120)");
        let back = Hsla::resolve(c.to_string()).unwrap();
        assert_relative_eq!(back.hue(), c.hue(), epsilon = 1e-9);
        assert_relative_eq!(back.luminance(), c.luminance(), epsilon = 1e-9);
    }

    #[test]
    fn test_hsla_invert() {
        let c = Hsla::new(0.25, 1.0, 0.0, 0.5).unwrap();
        let inv = c.invert();
        assert_eq!(inv.to_array(), [0.75, 0.0, 1.0]);
        assert_eq!(inv.alpha(), 0.5);
    }
}
