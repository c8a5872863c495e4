//! # Math Types
//!
//! Double precision vectors used throughout the kernel. All geometry
//! is stored and computed in f64.

pub use glam::{DVec2 as Vector2, DVec3 as Vector3};

/// Unit normal of the triangle `(a, b, c)` from `(b - a) × (c - a)`.
///
/// A zero-length cross product (collinear or coincident points) yields
/// the zero vector instead of NaN.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::math::{triangle_normal, Vector3};
///
/// let n = triangle_normal(Vector3::ZERO, Vector3::X, Vector3::Y);
/// assert_eq!(n, Vector3::Z);
/// ```
pub fn triangle_normal(a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
    (b - a).cross(c - a).normalize_or_zero()
}
