//! # valo-color
//!
//! Channel-clamped color value types: [`Rgba`], [`Hsla`] and the
//! either-kind [`Color`] sum.
//!
//! Channels live in [0, 1]. Values are immutable: updates go through
//! `with_*` methods that clamp and return a new value, never through
//! hidden setter mutation.
//!
//! # Accepted shapes
//!
//! ```rust
//! use valo_color::Rgba;
//! use valo_core::Resolvable;
//!
//! let red = Rgba::resolve([1.0, 0.0, 0.0]).unwrap();
//! assert_eq!(Rgba::resolve("#ff0000").unwrap(), red);
//! assert_eq!(Rgba::resolve("rgb(255,0,0)").unwrap(), red);
//! assert_eq!(Rgba::resolve(0xff0000 as f64).unwrap(), red);
//! ```
//!
//! # Dependencies
//!
//! - [`valo-core`] - resolution protocol, probes, clamping
//! - [`valo-math`] - vector conversions
//!
//! # Used By
//!
//! - `valo-tests` - color round-trip and clamp-invariant tests

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod any;
mod hsla;
mod pack;
mod rgba;

pub use any::*;
pub use hsla::*;
pub use pack::*;
pub use rgba::*;
