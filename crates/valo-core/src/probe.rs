//! Input probes used by the resolution protocol.
//!
//! These are the primitive checks every `cast` implementation is built
//! from: finite numbers, non-empty text, fixed-length numeric lists and
//! hex payloads.
//!
//! # Usage
//!
//! ```rust
//! use valo_core::probe::{parse_components, hex_payload};
//!
//! let xy: [f64; 2] = parse_components("1.5,-2", ',').unwrap();
//! assert_eq!(xy, [1.5, -2.0]);
//!
//! assert_eq!(hex_payload("#ff0000"), Some("ff0000"));
//! assert_eq!(hex_payload("0xBEEF"), Some("BEEF"));
//! assert_eq!(hex_payload("#zz0000"), None);
//! ```

/// Returns `true` if `value` is a finite number (not NaN or infinite).
#[inline]
pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// Returns `true` if `text` has content.
#[inline]
pub fn is_valid_text(text: &str) -> bool {
    !text.is_empty()
}

/// Parses a single finite number, tolerating surrounding whitespace.
///
/// Returns `None` for empty input, malformed numbers, and textual
/// NaN/infinity spellings: the resolution grammars only admit finite
/// literals.
#[inline]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses exactly `N` separator-delimited finite numbers.
///
/// This is the fixed-length numeric-list probe behind every
/// comma/`x`-separated grammar in the workspace. Surplus or missing
/// items fail the probe.
///
/// # Example
///
/// ```rust
/// use valo_core::probe::parse_components;
///
/// assert_eq!(parse_components::<3>("1,2,3", ','), Some([1.0, 2.0, 3.0]));
/// assert_eq!(parse_components::<3>("1,2", ','), None);
/// assert_eq!(parse_components::<2>("640x480", 'x'), Some([640.0, 480.0]));
/// ```
pub fn parse_components<const N: usize>(text: &str, separator: char) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = text.split(separator);
    for slot in &mut out {
        *slot = parse_number(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Strips a hex prefix (`#`, `$` or `0x`) and validates the payload.
///
/// Returns the digits without their prefix, or `None` when the prefix is
/// missing or a non-hex character appears.
pub fn hex_payload(text: &str) -> Option<&str> {
    let payload = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix('$'))
        .or_else(|| text.strip_prefix("0x"))?;
    if !payload.is_empty() && payload.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(payload)
    } else {
        None
    }
}

/// Returns `true` if `text` is a prefixed hex string.
#[inline]
pub fn is_hex_text(text: &str) -> bool {
    hex_payload(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number(0.0));
        assert!(is_valid_number(-1.5e300));
        assert!(!is_valid_number(f64::NAN));
        assert!(!is_valid_number(f64::INFINITY));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("-0"), Some(0.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components::<2>("1,2", ','), Some([1.0, 2.0]));
        assert_eq!(parse_components::<2>("1,2,3", ','), None);
        assert_eq!(parse_components::<4>("0,10,0,20", ','), Some([0.0, 10.0, 0.0, 20.0]));
        assert_eq!(parse_components::<2>("1,", ','), None);
        assert_eq!(parse_components::<1>("42", ','), Some([42.0]));
    }

    #[test]
    fn test_hex_payload() {
        assert_eq!(hex_payload("#fff"), Some("fff"));
        assert_eq!(hex_payload("$12AB34"), Some("12AB34"));
        assert_eq!(hex_payload("0xdeadBEEF"), Some("deadBEEF"));
        assert_eq!(hex_payload("ff0000"), None);
        assert_eq!(hex_payload("#"), None);
        assert_eq!(hex_payload("#gg0000"), None);
    }

    #[test]
    fn test_is_hex_text() {
        assert!(is_hex_text("#ff0000"));
        assert!(!is_hex_text("rgb(255,0,0)"));
    }
}
