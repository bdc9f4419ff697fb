//! # valo-transform
//!
//! Parent-linked 2D/3D poses producing world-space matrices.
//!
//! Transforms live in an arena ([`TransformArena2D`] /
//! [`TransformArena3D`]) and reference their parent by
//! [`TransformId`], never by pointer - there is no ownership between
//! nodes and no cycle to worry about, since ids are append-only and a
//! node can only point at transforms inserted before it.
//!
//! # Usage
//!
//! ```rust
//! use valo_math::Vec2;
//! use valo_transform::{Transform2D, TransformArena2D};
//!
//! let mut arena = TransformArena2D::new();
//! let root = arena.insert(
//!     Transform2D::new((10.0, 0.0), 0.0, (1.0, 1.0)),
//!     None,
//! );
//! let child = arena.insert(
//!     Transform2D::new((5.0, 0.0), 0.0, (1.0, 1.0)),
//!     Some(root),
//! );
//! assert_eq!(arena.global_position(child), Vec2::new(15.0, 0.0));
//! ```
//!
//! # Dependencies
//!
//! - [`valo-math`] - matrices and quaternions for the world poses

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod transform2;
mod transform3;

pub use transform2::*;
pub use transform3::*;

/// Handle to a transform stored in an arena.
///
/// Ids are minted by `insert` and stay valid for the arena's lifetime;
/// nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformId(pub(crate) usize);

impl TransformId {
    /// The arena slot this id points at.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}
