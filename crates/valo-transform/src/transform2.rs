//! 2D pose and arena.

use std::fmt;

use valo_core::scalar::{degrees_to_radians, radians_to_degrees};
use valo_math::{Mat3, Vec2};

use crate::TransformId;

/// A local 2D pose: origin offset, position, rotation (radians) and
/// scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2D {
    /// Extra translation applied on top of the position.
    pub origin: Vec2,
    /// Local position.
    pub position: Vec2,
    /// Local rotation in radians.
    pub rotation: f64,
    /// Local scale.
    pub scale: Vec2,
}

impl Transform2D {
    /// Creates a pose from position, rotation (radians) and scale.
    pub fn new(position: impl Into<Vec2>, rotation: f64, scale: impl Into<Vec2>) -> Self {
        Self {
            origin: Vec2::ZERO,
            position: position.into(),
            rotation,
            scale: scale.into(),
        }
    }

    /// The identity pose.
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0, Vec2::ONE)
    }

    /// Local rotation in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        radians_to_degrees(self.rotation)
    }

    /// Sets the local rotation from degrees.
    #[inline]
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.rotation = degrees_to_radians(degrees);
    }

    /// The local matrix: scale, then rotation, then translation.
    pub fn local_matrix(&self) -> Mat3 {
        Mat3::IDENTITY
            .scale(self.scale)
            .rotate(self.rotation)
            .translate(self.position)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Transform2D {
    /// Formats as `position|rotation|scale`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.position, self.rotation, self.scale)
    }
}

struct Node {
    transform: Transform2D,
    parent: Option<TransformId>,
}

/// Append-only store of 2D transforms with parent links by id.
///
/// World-space queries walk the parent chain; a dangling id (from a
/// different arena) simply ends the walk.
#[derive(Default)]
pub struct TransformArena2D {
    nodes: Vec<Node>,
}

impl TransformArena2D {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of stored transforms.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been inserted yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a transform, optionally under a parent, and returns its
    /// id.
    pub fn insert(&mut self, transform: Transform2D, parent: Option<TransformId>) -> TransformId {
        let id = TransformId(self.nodes.len());
        self.nodes.push(Node { transform, parent });
        id
    }

    /// Returns the transform behind `id`.
    pub fn get(&self, id: TransformId) -> Option<&Transform2D> {
        self.nodes.get(id.0).map(|n| &n.transform)
    }

    /// Returns the transform behind `id` for mutation.
    pub fn get_mut(&mut self, id: TransformId) -> Option<&mut Transform2D> {
        self.nodes.get_mut(id.0).map(|n| &mut n.transform)
    }

    /// Returns the parent id of `id`, if any.
    pub fn parent(&self, id: TransformId) -> Option<TransformId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    fn walk<T>(&self, id: TransformId, mut state: T, f: impl Fn(T, &Transform2D) -> T) -> T {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(node) = self.nodes.get(id.0) else {
                break;
            };
            state = f(state, &node.transform);
            current = node.parent;
        }
        state
    }

    /// World position: the sum of positions and origins up the chain.
    ///
    /// Deliberately ignores ancestor rotation and scale; use
    /// [`global_matrix`](Self::global_matrix) for the full pose.
    pub fn global_position(&self, id: TransformId) -> Vec2 {
        self.walk(id, Vec2::ZERO, |acc, t| acc + t.position + t.origin)
    }

    /// World rotation: the sum of local angles up the chain.
    pub fn global_rotation(&self, id: TransformId) -> f64 {
        self.walk(id, 0.0, |acc, t| acc + t.rotation)
    }

    /// World rotation in degrees.
    pub fn global_rotation_degrees(&self, id: TransformId) -> f64 {
        radians_to_degrees(self.global_rotation(id))
    }

    /// World scale: the component-wise product up the chain.
    pub fn global_scale(&self, id: TransformId) -> Vec2 {
        self.walk(id, Vec2::ONE, |acc, t| acc * t.scale)
    }

    /// World matrix: the product of local matrices, parent-most applied
    /// last.
    pub fn global_matrix(&self, id: TransformId) -> Mat3 {
        self.walk(id, Mat3::IDENTITY, |acc, t| acc.multiply(t.local_matrix()))
    }
}
