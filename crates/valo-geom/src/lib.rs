//! # valo-geom
//!
//! Geometry value types built on [`valo_math::Vec2`]: sizes, rectangles,
//! bounding boxes, circles and triangles.
//!
//! All aggregates exclusively own their embedded vectors/sizes - every
//! construction path copies incoming numeric data into a fresh instance.
//!
//! # Usage
//!
//! ```rust
//! use valo_geom::{BoundingBox, Rectangle};
//! use valo_core::Resolvable;
//!
//! let rect = Rectangle::resolve("0,0|10x10").unwrap();
//! let bbox: BoundingBox = rect.to_bounding_box();
//! assert!(bbox.inside_point((5.0, 5.0)));
//! assert_eq!(bbox.to_rectangle(), rect);
//! ```
//!
//! # Dependencies
//!
//! - [`valo-core`] - resolution protocol, probes
//! - [`valo-math`] - the `Vec2`/`Vec3` building blocks
//!
//! # Used By
//!
//! - `valo-tests` - cross-crate round-trip and predicate tests

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bbox;
mod circle;
mod rect;
mod size;
mod triangle;

pub use bbox::*;
pub use circle::*;
pub use rect::*;
pub use size::*;
pub use triangle::*;
