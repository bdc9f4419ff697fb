//! The multi-format resolution protocol.
//!
//! Every value type in the workspace accepts a union of input shapes: the
//! canonical value itself, fixed-length numeric arrays, formatted text, a
//! scalar shorthand broadcast to all fields, and delegate conversions
//! from neighboring types. [`Resolvable`] is the contract tying those
//! together.
//!
//! # Shape priority
//!
//! The original run-time probing applied shapes in a fixed priority
//! order. Here that order is static: each type's `Like` enum owns one
//! variant per shape, and ambiguous literals (a 3-element array can mean
//! "2D vector plus homogeneous w" or "RGB triple") are settled per target
//! type by which `From` impl covers the shape. Changing a `From` impl
//! changes which shape wins, so each `Like` enum documents its choices.
//!
//! # Calling conventions
//!
//! Methods that take "a T-like thing" accept `impl Into<T>` (not
//! `impl Into<T::Like>`): the infallible shapes - tuples, arrays,
//! scalars, neighboring value types - convert directly, which is the
//! spread-vs-object convention without a fallible edge. Inputs that need
//! parsing (text) must go through [`Resolvable::resolve`] first.

use crate::error::{ResolveError, ResolveResult};
use std::fmt;

/// Conversion protocol implemented by every value type.
///
/// # Contract
///
/// - [`cast`](Self::cast) tries every accepted shape in the type's
///   documented priority order and never fails loudly: unparseable text
///   and non-finite components yield `None`.
/// - [`resolve`](Self::resolve) is the only failing entry point; it
///   wraps `cast` and reports a [`ResolveError`] carrying
///   [`NAME`](Self::NAME) and the rejected input.
/// - [`is`](Self::is) is the cheap guard form.
///
/// # Example
///
/// ```rust
/// use valo_core::Resolvable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Celsius(f64);
///
/// #[derive(Debug, Clone)]
/// enum CelsiusLike {
///     Scalar(f64),
///     Text(String),
/// }
///
/// impl From<f64> for CelsiusLike {
///     fn from(v: f64) -> Self {
///         CelsiusLike::Scalar(v)
///     }
/// }
///
/// impl From<&str> for CelsiusLike {
///     fn from(s: &str) -> Self {
///         CelsiusLike::Text(s.to_owned())
///     }
/// }
///
/// impl Resolvable for Celsius {
///     type Like = CelsiusLike;
///     const NAME: &'static str = "Celsius";
///
///     fn cast(like: CelsiusLike) -> Option<Celsius> {
///         match like {
///             CelsiusLike::Scalar(v) if v.is_finite() => Some(Celsius(v)),
///             CelsiusLike::Scalar(_) => None,
///             CelsiusLike::Text(s) => {
///                 valo_core::probe::parse_number(s.strip_suffix("C")?).map(Celsius)
///             }
///         }
///     }
/// }
///
/// assert_eq!(Celsius::resolve("21.5C"), Ok(Celsius(21.5)));
/// assert!(Celsius::is(36.6));
/// let err = Celsius::resolve("warm").unwrap_err();
/// assert_eq!(err.target, "Celsius");
/// ```
pub trait Resolvable: Sized {
    /// The union of input shapes this type accepts.
    type Like: fmt::Debug + Clone;

    /// Name reported by [`ResolveError`] when resolution fails.
    const NAME: &'static str;

    /// Attempts every accepted shape in priority order.
    ///
    /// Returns `None` when no shape matches; never panics.
    fn cast(like: Self::Like) -> Option<Self>;

    /// Converts a `Like` input into the canonical value, failing loudly.
    ///
    /// # Errors
    ///
    /// [`ResolveError`] naming [`Self::NAME`] and the rejected input when
    /// no accepted shape matches.
    fn resolve(like: impl Into<Self::Like>) -> ResolveResult<Self> {
        let like = like.into();
        match Self::cast(like.clone()) {
            Some(value) => Ok(value),
            None => Err(ResolveError::new(Self::NAME, format!("{like:?}"))),
        }
    }

    /// Returns `true` if `like` matches one of the accepted shapes.
    fn is(like: impl Into<Self::Like>) -> bool {
        Self::cast(like.into()).is_some()
    }
}
