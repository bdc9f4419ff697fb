//! # valo-core
//!
//! Foundation crate for the valo-rs value-type library.
//!
//! This crate provides the pieces every other valo crate builds on:
//!
//! - [`Resolvable`] - the multi-format resolution protocol (`cast` /
//!   `resolve` / `is`) implemented by every value type
//! - [`ResolveError`], [`ValidationError`] - the two error tiers
//! - [`probe`] - input probes (finite numbers, fixed-length numeric
//!   lists, hex payloads)
//! - [`scalar`] - scalar helpers (`clamp`, `lerp`, `log_hypot`, angle
//!   conversions)
//!
//! # Design
//!
//! Value types accept a union of input shapes (canonical value, array,
//! formatted text, scalar shorthand, delegate conversion). Each type
//! models that union as a dedicated `Like` enum and implements
//! [`Resolvable`] over it, so the set of accepted shapes is closed and
//! checked at compile time.
//!
//! # Usage
//!
//! ```rust
//! use valo_core::{Resolvable, ResolveError};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Half(f64);
//!
//! #[derive(Debug, Clone)]
//! enum HalfLike {
//!     Value(Half),
//!     Scalar(f64),
//! }
//!
//! impl From<f64> for HalfLike {
//!     fn from(v: f64) -> Self {
//!         HalfLike::Scalar(v)
//!     }
//! }
//!
//! impl Resolvable for Half {
//!     type Like = HalfLike;
//!     const NAME: &'static str = "Half";
//!
//!     fn cast(like: HalfLike) -> Option<Half> {
//!         match like {
//!             HalfLike::Value(half) => Some(half),
//!             HalfLike::Scalar(v) if v.is_finite() => Some(Half(v / 2.0)),
//!             HalfLike::Scalar(_) => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Half::resolve(3.0), Ok(Half(1.5)));
//! assert!(Half::resolve(f64::NAN).is_err());
//! ```
//!
//! # Crate Structure
//!
//! This crate is the root of the valo-rs dependency graph and has no
//! internal dependencies:
//!
//! ```text
//! valo-core (this crate)
//!    ^
//!    |
//!    +-- valo-math (vectors, matrices, quaternions)
//!    +-- valo-geom (sizes, rectangles, circles, triangles)
//!    +-- valo-color (RGBA/HSLA)
//!    +-- valo-algebra (linear/quadratic functions)
//!    +-- valo-transform (scene transforms)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod probe;
pub mod resolve;
pub mod scalar;

pub use error::*;
pub use resolve::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use valo_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ResolveError, ResolveResult, ValidationError};
    pub use crate::probe::{is_valid_number, is_valid_text, parse_components, parse_number};
    pub use crate::resolve::Resolvable;
    pub use crate::scalar::{clamp, clamp01, lerp, EPSILON};
}
