//! Scalar helpers shared across the value types.
//!
//! # Usage
//!
//! ```rust
//! use valo_core::scalar::{clamp, clamp01, lerp};
//!
//! assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
//! assert_eq!(clamp01(-0.25), 0.0);
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! ```

/// Length threshold below which normalization returns a canonical zero
/// value instead of dividing.
pub const EPSILON: f64 = 1e-16;

/// A full turn in degrees.
pub const MAX_DEGREES: f64 = 360.0;

/// Clamps `value` to the range [min, max].
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps `value` to [0, 1].
///
/// The invariant behind every color channel in the workspace.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
///
/// # Example
///
/// ```rust
/// use valo_core::scalar::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Natural logarithm of the magnitude of the complex number `a + bi`.
///
/// Below |3000| per component this is the plain `0.5 * ln(a^2 + b^2)`.
/// Above it the components are halved before squaring and `ln 2` is
/// added back, so the square never overflows. Quaternion `exp`/`log`
/// rely on this instead of `ln(sqrt(a^2 + b^2))`.
///
/// # Example
///
/// ```rust
/// use valo_core::scalar::log_hypot;
///
/// assert!((log_hypot(3.0, 4.0) - 5.0_f64.ln()).abs() < 1e-12);
/// // At this magnitude a*a + b*b overflows; the halved path does not.
/// let huge = 1e154;
/// assert!(log_hypot(huge, huge).is_finite());
/// ```
pub fn log_hypot(a: f64, b: f64) -> f64 {
    let a_abs = a.abs();
    let b_abs = b.abs();
    if a == 0.0 {
        return b_abs.ln();
    }
    if b == 0.0 {
        return a_abs.ln();
    }
    if a_abs < 3000.0 && b_abs < 3000.0 {
        return 0.5 * (a * a + b * b).ln();
    }
    let half_a = a / 2.0;
    let half_b = b / 2.0;
    0.5 * (half_a * half_a + half_b * half_b).ln() + std::f64::consts::LN_2
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(angle: f64) -> f64 {
    angle * (180.0 / std::f64::consts::PI)
}

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(angle: f64) -> f64 {
    angle * (std::f64::consts::PI / 180.0)
}

/// Wraps a degree angle into (-360, 360).
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    angle % MAX_DEGREES
}

/// Returns the sign character of `value`: `'-'`, `'+'`, or `None` for
/// zero (and NaN).
///
/// Used by the algebra `Display` impls to typeset `f(x) = m * x + b`.
#[inline]
pub fn sign_char(value: f64) -> Option<char> {
    if value < 0.0 {
        Some('-')
    } else if value > 0.0 {
        Some('+')
    } else {
        None
    }
}
