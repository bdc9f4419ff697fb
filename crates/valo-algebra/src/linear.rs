//! Linear function `f(x) = m * x + b`.

use std::fmt;

use valo_core::error::{ensure_finite, ValidationResult};
use valo_core::scalar::sign_char;
use valo_math::Vec2;

/// A linear function with slope `m` and intercept `b`.
///
/// # Example
///
/// ```rust
/// use valo_algebra::LinearFunction;
///
/// let f = LinearFunction::new(2.0, -4.0).unwrap();
/// assert_eq!(f.evaluate(3.0), 2.0);
/// assert_eq!(f.roots()[0].x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFunction {
    /// Slope.
    pub m: f64,
    /// Intercept.
    pub b: f64,
}

impl LinearFunction {
    const NAME: &'static str = "LinearFunction";

    /// Checked constructor: fails if either coefficient is not finite.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](valo_core::ValidationError) naming the
    /// offending coefficient.
    pub fn new(m: f64, b: f64) -> ValidationResult<Self> {
        Ok(Self {
            m: ensure_finite(Self::NAME, "m", m)?,
            b: ensure_finite(Self::NAME, "b", b)?,
        })
    }

    /// Creates the line through two points.
    ///
    /// # Errors
    ///
    /// A vertical point pair has no finite slope and fails validation.
    pub fn from_points(a: impl Into<Vec2>, b: impl Into<Vec2>) -> ValidationResult<Self> {
        let (a, b) = (a.into(), b.into());
        let m = (b.y - a.y) / (b.x - a.x);
        Self::new(m, -m * a.x + a.y)
    }

    /// Evaluates the function at `x`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// Returns the zero crossings.
    ///
    /// A constant function (`m = 0`) has none, so the quotient `-b/m`
    /// is only kept when it comes out finite.
    pub fn roots(&self) -> Vec<Vec2> {
        let x = -self.b / self.m;
        if x.is_finite() {
            vec![Vec2::new(x, 0.0)]
        } else {
            Vec::new()
        }
    }
}

impl fmt::Display for LinearFunction {
    /// Formats as `f(x) = m * x + b`, omitting a zero intercept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match sign_char(self.b) {
            Some(sign) => write!(f, "f(x) = {} * x {} {}", self.m, sign, self.b.abs()),
            None => write!(f, "f(x) = {} * x", self.m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_evaluate() {
        let f = LinearFunction::new(2.0, 1.0).unwrap();
        assert_eq!(f.evaluate(0.0), 1.0);
        assert_eq!(f.evaluate(3.0), 7.0);
    }

    #[test]
    fn test_linear_rejects_non_finite() {
        assert!(LinearFunction::new(f64::NAN, 0.0).is_err());
        assert!(LinearFunction::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_linear_roots() {
        let f = LinearFunction::new(2.0, -4.0).unwrap();
        assert_eq!(f.roots(), vec![Vec2::new(2.0, 0.0)]);

        // Constant functions have no crossing.
        let flat = LinearFunction::new(0.0, 5.0).unwrap();
        assert!(flat.roots().is_empty());
    }

    #[test]
    fn test_linear_from_points() {
        let f = LinearFunction::from_points((0.0, 1.0), (2.0, 5.0)).unwrap();
        assert_eq!(f.m, 2.0);
        assert_eq!(f.b, 1.0);

        // Vertical pair: no finite slope.
        assert!(LinearFunction::from_points((1.0, 0.0), (1.0, 5.0)).is_err());
    }

    #[test]
    fn test_linear_display() {
        assert_eq!(
            LinearFunction::new(2.0, -4.0).unwrap().to_string(),
            "f(x) = 2 * x - 4"
        );
        assert_eq!(
            LinearFunction::new(1.5, 3.0).unwrap().to_string(),
            "f(x) = 1.5 * x + 3"
        );
        assert_eq!(
            LinearFunction::new(1.0, 0.0).unwrap().to_string(),
            "f(x) = 1 * x"
        );
    }
}
