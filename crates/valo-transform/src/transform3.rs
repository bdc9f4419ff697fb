//! 3D pose and arena.

use std::fmt;

use valo_math::{Mat4, Quaternion, Vec3};

use crate::TransformId;

/// A local 3D pose: origin offset, position, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform3D {
    /// Extra translation applied on top of the position.
    pub origin: Vec3,
    /// Local position.
    pub position: Vec3,
    /// Local rotation.
    pub rotation: Quaternion,
    /// Local scale.
    pub scale: Vec3,
}

impl Transform3D {
    /// Creates a pose from position, rotation and scale.
    pub fn new(
        position: impl Into<Vec3>,
        rotation: impl Into<Quaternion>,
        scale: impl Into<Vec3>,
    ) -> Self {
        Self {
            origin: Vec3::ZERO,
            position: position.into(),
            rotation: rotation.into(),
            scale: scale.into(),
        }
    }

    /// The identity pose.
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Quaternion::IDENTITY, Vec3::ONE)
    }

    /// The local matrix: scale, then rotation, then translation.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
            .scale(self.scale)
            .multiply(self.rotation.to_mat4())
            .translate(self.position)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Transform3D {
    /// Formats as `position|rotation|scale`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.position, self.rotation, self.scale)
    }
}

struct Node {
    transform: Transform3D,
    parent: Option<TransformId>,
}

/// Append-only store of 3D transforms with parent links by id.
#[derive(Default)]
pub struct TransformArena3D {
    nodes: Vec<Node>,
}

impl TransformArena3D {
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
    pub fn insert(&mut self, transform: Transform3D, parent: Option<TransformId>) -> TransformId {
        let id = TransformId(self.nodes.len());
        self.nodes.push(Node { transform, parent });
        id
    }

    /// Returns the transform behind `id`.
    pub fn get(&self, id: TransformId) -> Option<&Transform3D> {
        self.nodes.get(id.0).map(|n| &n.transform)
    }

    /// Returns the transform behind `id` for mutation.
    pub fn get_mut(&mut self, id: TransformId) -> Option<&mut Transform3D> {
        self.nodes.get_mut(id.0).map(|n| &mut n.transform)
    }

    /// Returns the parent id of `id`, if any.
    pub fn parent(&self, id: TransformId) -> Option<TransformId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    fn walk<T>(&self, id: TransformId, mut state: T, f: impl Fn(T, &Transform3D) -> T) -> T {
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
    pub fn global_position(&self, id: TransformId) -> Vec3 {
        self.walk(id, Vec3::ZERO, |acc, t| acc + t.position + t.origin)
    }

    /// World rotation: ancestor rotations composed by quaternion
    /// multiplication, parent-most applied last.
    pub fn global_rotation(&self, id: TransformId) -> Quaternion {
        self.walk(id, Quaternion::IDENTITY, |acc, t| t.rotation.multiply(acc))
    }

    /// World scale: the component-wise product up the chain.
    pub fn global_scale(&self, id: TransformId) -> Vec3 {
        self.walk(id, Vec3::ONE, |acc, t| acc * t.scale)
    }

    /// World matrix: the product of local matrices, parent-most applied
    /// last.
    pub fn global_matrix(&self, id: TransformId) -> Mat4 {
        self.walk(id, Mat4::IDENTITY, |acc, t| acc.multiply(t.local_matrix()))
    }
}
