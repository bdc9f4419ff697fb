//! Error types for valo-rs value types.
//!
//! The library distinguishes exactly two failure classes:
//!
//! - [`ValidationError`] - a checked constructor rejected a malformed
//!   literal (non-finite field, zero leading coefficient)
//! - [`ResolveError`] - an input matched none of a type's accepted
//!   shapes during [`resolve`](crate::Resolvable::resolve)
//!
//! The split is deliberate: a `ValidationError` means the caller built a
//! bad value out of otherwise well-shaped parts, while a `ResolveError`
//! means the input shape itself was not understood. Callers that want
//! best-effort resolution use [`cast`](crate::Resolvable::cast) and
//! handle `None` instead.
//!
//! # Usage
//!
//! ```rust
//! use valo_core::{ResolveError, ValidationError};
//!
//! let err = ResolveError::new("Vec2", "\"not-a-vector\"");
//! assert!(err.to_string().contains("Vec2"));
//!
//! let err = ValidationError::non_finite("Vec2", "x", f64::NAN);
//! assert!(err.to_string().contains("finite"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro error implementation

use thiserror::Error;

/// Result type alias for resolution, using [`ResolveError`].
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Result type alias for checked construction, using [`ValidationError`].
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Error raised when a `Like` input matches none of a type's accepted
/// shapes.
///
/// Produced exclusively by [`Resolvable::resolve`](crate::Resolvable::resolve);
/// [`cast`](crate::Resolvable::cast) reports the same condition as `None`.
///
/// # Example
///
/// ```rust
/// use valo_core::ResolveError;
///
/// let err = ResolveError::new("Size", "\"12y34\"");
/// assert_eq!(err.target, "Size");
/// assert_eq!(err.to_string(), "cannot resolve \"12y34\" to Size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve {value} to {target}")]
pub struct ResolveError {
    /// Name of the value type the input was resolved towards.
    pub target: &'static str,
    /// Rendering of the rejected input.
    pub value: String,
}

impl ResolveError {
    /// Creates a resolve error for `target` with a rendering of the
    /// rejected input.
    #[inline]
    pub fn new(target: &'static str, value: impl Into<String>) -> Self {
        Self {
            target,
            value: value.into(),
        }
    }
}

/// Error raised by checked constructors when a field violates a
/// structural invariant.
///
/// # Categories
///
/// - [`NonFinite`](ValidationError::NonFinite) - a numeric field is NaN
///   or infinite
/// - [`ZeroCoefficient`](ValidationError::ZeroCoefficient) - a
///   coefficient that must be non-zero was zero (e.g. the leading
///   coefficient of a quadratic)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric field is NaN or infinite.
    #[error("{type_name}.{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the value type under construction.
        type_name: &'static str,
        /// Name of the offending field.
        field: &'static str,
        /// The non-finite value that was passed.
        value: f64,
    },

    /// A coefficient that must be non-zero was zero.
    #[error("{type_name}.{field} must be non-zero")]
    ZeroCoefficient {
        /// Name of the value type under construction.
        type_name: &'static str,
        /// Name of the offending field.
        field: &'static str,
    },
}

impl ValidationError {
    /// Creates a [`ValidationError::NonFinite`] error.
    #[inline]
    pub fn non_finite(type_name: &'static str, field: &'static str, value: f64) -> Self {
        Self::NonFinite {
            type_name,
            field,
            value,
        }
    }

    /// Creates a [`ValidationError::ZeroCoefficient`] error.
    #[inline]
    pub fn zero_coefficient(type_name: &'static str, field: &'static str) -> Self {
        Self::ZeroCoefficient { type_name, field }
    }

    /// Returns `true` if this is a non-finite-field error.
    #[inline]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFinite { .. })
    }
}

/// Checks that `value` is finite, returning it unchanged on success.
///
/// Shorthand used by every checked constructor in the workspace.
///
/// # Example
///
/// ```rust
/// use valo_core::error::ensure_finite;
///
/// assert_eq!(ensure_finite("Vec2", "x", 1.5), Ok(1.5));
/// assert!(ensure_finite("Vec2", "x", f64::INFINITY).is_err());
/// ```
#[inline]
pub fn ensure_finite(
    type_name: &'static str,
    field: &'static str,
    value: f64,
) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::non_finite(type_name, field, value))
    }
}
