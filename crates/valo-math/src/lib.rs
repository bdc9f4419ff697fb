//! # valo-math
//!
//! Numeric value types: vectors, matrices and quaternions.
//!
//! Every type here implements the [`Resolvable`](valo_core::Resolvable)
//! protocol over its own `Like` union, so the same value can arrive as a
//! canonical instance, a fixed-length array, a formatted string or a
//! scalar shorthand:
//!
//! ```rust
//! use valo_math::Vec2;
//! use valo_core::Resolvable;
//!
//! let a = Vec2::resolve([1.0, 2.0]).unwrap();
//! let b = Vec2::resolve("1,2").unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! # Convention
//!
//! Matrices are stored **row-major** and transform **column vectors**.
//! [`Mat3::multiply`] and [`Mat4::multiply`] combine the *other*
//! matrix's rows against this matrix's columns, so builder chains
//! accumulate left-multiplied steps:
//!
//! ```rust
//! use valo_math::Mat3;
//!
//! // Applies scale first, then rotation, then translation.
//! let m = Mat3::IDENTITY
//!     .scale((2.0, 2.0))
//!     .rotate(std::f64::consts::FRAC_PI_2)
//!     .translate((10.0, 0.0));
//! # let _ = m;
//! ```
//!
//! # Dependencies
//!
//! - [`valo-core`] - resolution protocol, probes, scalar helpers
//! - [`glam`] - interop with the wider Rust math ecosystem
//!
//! # Used By
//!
//! - `valo-geom` - geometry aggregates built on [`Vec2`]
//! - `valo-color` - vector/color conversions
//! - `valo-transform` - pose-to-matrix composition

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;

pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;

/// Re-export of the glam f64 types the interop converters target.
pub mod glam {
    pub use ::glam::{DMat3, DMat4, DQuat, DVec2, DVec3};
}
