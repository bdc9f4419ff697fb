//! Triangle type, generic over 2D or 3D vertices.
//!
//! Side lengths are always derived from vertex distances, never stored;
//! angles come from the law of cosines. A colinear vertex set yields a
//! zero area rather than an error.

use valo_math::{Vec2, Vec3};

/// Vertex types a [`Triangle`] can be built from.
pub trait Vertex: Copy {
    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Self) -> f64;
}

impl Vertex for Vec2 {
    #[inline]
    fn distance_to(&self, other: &Self) -> f64 {
        self.distance(*other)
    }
}

impl Vertex for Vec3 {
    #[inline]
    fn distance_to(&self, other: &Self) -> f64 {
        self.distance(*other)
    }
}

/// A triangle over vertices `a`, `b`, `c`.
///
/// Following the usual naming, side `a` is opposite vertex `a` (it runs
/// from `b` to `c`), and the angle alpha sits at vertex `a`.
///
/// # Example
///
/// ```rust
/// use valo_geom::Triangle2;
/// use valo_math::Vec2;
///
/// let t = Triangle2::new(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(4.0, 0.0),
///     Vec2::new(0.0, 3.0),
/// );
/// assert_eq!(t.area(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<P> {
    /// First vertex.
    pub a: P,
    /// Second vertex.
    pub b: P,
    /// Third vertex.
    pub c: P,
}

/// Triangle over 2D vertices.
pub type Triangle2 = Triangle<Vec2>;

/// Triangle over 3D vertices.
pub type Triangle3 = Triangle<Vec3>;

impl<P: Vertex> Triangle<P> {
    /// Creates a triangle from three vertices.
    #[inline]
    pub const fn new(a: P, b: P, c: P) -> Self {
        Self { a, b, c }
    }

    /// Length of the side opposite vertex `a`.
    #[inline]
    pub fn side_a(&self) -> f64 {
        self.b.distance_to(&self.c)
    }

    /// Length of the side opposite vertex `b`.
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.a.distance_to(&self.c)
    }

    /// Length of the side opposite vertex `c`.
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    /// Angle at vertex `a` (law of cosines).
    pub fn alpha(&self) -> f64 {
        let (a, b, c) = (self.side_a(), self.side_b(), self.side_c());
        ((b * b + c * c - a * a) / (2.0 * b * c)).acos()
    }

    /// Angle at vertex `b` (law of cosines).
    pub fn beta(&self) -> f64 {
        let (a, b, c) = (self.side_a(), self.side_b(), self.side_c());
        ((c * c + a * a - b * b) / (2.0 * c * a)).acos()
    }

    /// Angle at vertex `c` (law of cosines).
    pub fn gamma(&self) -> f64 {
        let (a, b, c) = (self.side_a(), self.side_b(), self.side_c());
        ((a * a + b * b - c * c) / (2.0 * a * b)).acos()
    }

    /// Sum of the side lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.side_a() + self.side_b() + self.side_c()
    }

    /// Half the perimeter.
    #[inline]
    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Area by Heron's formula.
    ///
    /// Colinear vertices yield 0; rounding can push the radicand
    /// slightly negative, so it is clamped before the root.
    pub fn area(&self) -> f64 {
        let s = self.semiperimeter();
        let radicand = s * (s - self.side_a()) * (s - self.side_b()) * (s - self.side_c());
        radicand.max(0.0).sqrt()
    }

    /// Base length, recovered from the area through the angle gamma.
    pub fn base(&self) -> f64 {
        2.0 * (self.area() / (self.side_a() * self.gamma().sin()))
    }

    /// Height over [`base`](Self::base), from `area = base * height / 2`.
    pub fn height(&self) -> f64 {
        2.0 * (self.area() / self.base())
    }
}
