//! Packed-integer and hex-string color decoding.
//!
//! A bare number is read as big-endian packed bytes: values fitting in
//! six hex digits are opaque RGB, larger values carry a trailing alpha
//! byte. Hex strings accept `#`, `$` or `0x` prefixes with 3, 4, 6 or 8
//! digits; short forms double each digit (`#f80` = `#ff8800`).

use valo_core::probe::{hex_payload, parse_number};

/// Decodes a packed `0xRRGGBB` integer into 0-1 channels.
#[inline]
pub fn unpack_rgb(packed: u32) -> [f64; 3] {
    let red = (packed >> 16) & 0xff;
    let green = (packed >> 8) & 0xff;
    let blue = packed & 0xff;
    [red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0]
}

/// Decodes a packed `0xRRGGBBAA` integer into 0-1 channels.
#[inline]
pub fn unpack_rgba(packed: u32) -> [f64; 4] {
    let red = (packed >> 24) & 0xff;
    let green = (packed >> 16) & 0xff;
    let blue = (packed >> 8) & 0xff;
    let alpha = packed & 0xff;
    [
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
        alpha as f64 / 255.0,
    ]
}

/// Decodes a numeric color shorthand.
///
/// Magnitudes within six hex digits are opaque RGB; anything larger
/// (up to `u32::MAX`) is RGBA. Negative, fractional or non-finite
/// numbers do not match.
pub fn unpack_number(value: f64) -> Option<[f64; 4]> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    let packed = value as u32;
    if packed <= 0xff_ffff {
        let [r, g, b] = unpack_rgb(packed);
        Some([r, g, b, 1.0])
    } else {
        Some(unpack_rgba(packed))
    }
}

/// Parses a prefixed hex color string into 0-1 RGBA channels.
///
/// # Example
///
/// ```rust
/// use valo_color::parse_hex;
///
/// assert_eq!(parse_hex("#ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
/// assert_eq!(parse_hex("#f00"), parse_hex("0xff0000"));
/// assert_eq!(parse_hex("#ff000080"), Some([1.0, 0.0, 0.0, 128.0 / 255.0]));
/// assert_eq!(parse_hex("#ff00"), Some([1.0, 1.0, 0.0, 0.0]));
/// assert_eq!(parse_hex("#ff000"), None);
/// ```
pub fn parse_hex(text: &str) -> Option<[f64; 4]> {
    let payload = hex_payload(text)?;
    let digits: Option<Vec<u32>> = payload.chars().map(|c| c.to_digit(16)).collect();
    let digits = digits?;
    let byte = |hi: u32, lo: u32| (hi * 16 + lo) as f64 / 255.0;
    match digits[..] {
        // Short forms double each digit.
        [r, g, b] => Some([byte(r, r), byte(g, g), byte(b, b), 1.0]),
        [r, g, b, a] => Some([byte(r, r), byte(g, g), byte(b, b), byte(a, a)]),
        [r1, r0, g1, g0, b1, b0] => Some([byte(r1, r0), byte(g1, g0), byte(b1, b0), 1.0]),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Some([byte(r1, r0), byte(g1, g0), byte(b1, b0), byte(a1, a0)])
        }
        _ => None,
    }
}

/// Parses a functional color string (`rgb(..)`, `rgba(..)`, `hsl(..)`,
/// `hsla(..)`) for the given keyword.
///
/// Channel values are 0-255 integers mapped to the 0-1 range; the alpha
/// component of the `a` form is a 0-1 float taken as-is.
pub fn parse_functional(text: &str, keyword: &str) -> Option<[f64; 4]> {
    let rest = text.strip_prefix(keyword)?;
    let (has_alpha, rest) = match rest.strip_prefix('a') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let mut out = [0.0, 0.0, 0.0, 1.0];
    for channel in &mut out[..3] {
        *channel = parse_number(parts.next()?)? / 255.0;
    }
    if has_alpha {
        out[3] = parse_number(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unpack_rgb() {
        assert_eq!(unpack_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(unpack_rgb(0x00ff00), [0.0, 1.0, 0.0]);
        let [r, g, b] = unpack_rgb(0x123456);
        assert_relative_eq!(r, 0x12 as f64 / 255.0);
        assert_relative_eq!(g, 0x34 as f64 / 255.0);
        assert_relative_eq!(b, 0x56 as f64 / 255.0);
    }

    #[test]
    fn test_unpack_number_magnitude_switch() {
        // Six hex digits: opaque RGB.
        assert_eq!(unpack_number(0xffffff as f64), Some([1.0, 1.0, 1.0, 1.0]));
        // Seven or more: RGBA with trailing alpha byte.
        assert_eq!(
            unpack_number(0xff000080u32 as f64),
            Some([1.0, 0.0, 0.0, 128.0 / 255.0])
        );
        assert_eq!(unpack_number(-1.0), None);
        assert_eq!(unpack_number(0.5), None);
        assert_eq!(unpack_number(f64::NAN), None);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex("$ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex("0xff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex("#f00"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex("#f00f"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex("#ffffff00"), Some([1.0, 1.0, 1.0, 0.0]));
        assert_eq!(parse_hex("#ff00z0"), None);
        assert_eq!(parse_hex("#ff000"), None);
        assert_eq!(parse_hex("ff0000"), None);
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(
            parse_functional("rgb(255,0,0)", "rgb"),
            Some([1.0, 0.0, 0.0, 1.0])
        );
        assert_eq!(
            parse_functional("rgba(255,0,0,0.5)", "rgb"),
            Some([1.0, 0.0, 0.0, 0.5])
        );
        assert_eq!(parse_functional("rgb(255,0)", "rgb"), None);
        assert_eq!(parse_functional("rgb(255,0,0,1)", "rgb"), None);
        assert_eq!(parse_functional("hsl(255,0,0)", "rgb"), None);
        assert_eq!(
            parse_functional("hsla(128,255,64,1)", "hsl"),
            Some([128.0 / 255.0, 1.0, 64.0 / 255.0, 1.0])
        );
    }
}
