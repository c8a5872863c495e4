//! # Primitives
//!
//! Procedural mesh generators (cube, sphere, plane, cylinder), callable
//! directly or through [`Shape`] with a single size and detail level.
//!
//! Every generator builds through the public [`Mesh`] API, appends one
//! material named after the shape and finishes with
//! [`Mesh::calculate_normals`]. Vertex, UV and face orders are fixed so
//! exported files are reproducible.

pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod sphere;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use plane::create_plane;
pub use sphere::create_sphere;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{CYLINDER_HEIGHT_RATIO, DEFAULT_DETAIL, DEFAULT_SHAPE_SIZE};
use std::fmt;

/// The generator families, driven by a single size and detail level.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::primitives::Shape;
///
/// let mesh = Shape::Sphere.generate(1.0, 8, Shape::Sphere.numbered_name(3)).unwrap();
/// assert_eq!(mesh.name(), "Sphere_3");
/// assert_eq!(mesh.vertex_count(), 5 * 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Sphere,
    Plane,
    Cylinder,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Cube, Shape::Sphere, Shape::Plane, Shape::Cylinder];

    /// Builds the shape from one size and one detail level.
    ///
    /// - cube: edge `size`
    /// - sphere: radius `size`, `detail` segments, `detail / 2` rings
    /// - plane: `size` × `size`
    /// - cylinder: radius `size`, height `1.5 · size`, `detail` segments
    ///
    /// Cubes and planes ignore `detail`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying generator rejects.
    pub fn generate(self, size: f64, detail: u32, name: impl Into<String>) -> MeshResult<Mesh> {
        match self {
            Shape::Cube => create_cube(size, name),
            Shape::Sphere => create_sphere(size, detail, detail / 2, name),
            Shape::Plane => create_plane(size, size, name),
            Shape::Cylinder => create_cylinder(size, size * CYLINDER_HEIGHT_RATIO, detail, name),
        }
    }

    /// [`Shape::generate`] with the default size and detail.
    pub fn generate_default(self, name: impl Into<String>) -> MeshResult<Mesh> {
        self.generate(DEFAULT_SHAPE_SIZE, DEFAULT_DETAIL, name)
    }

    /// Name such as `Cube_2` for the `ordinal`-th mesh in a document.
    pub fn numbered_name(self, ordinal: usize) -> String {
        format!("{self}_{ordinal}")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Cube => "Cube",
            Shape::Sphere => "Sphere",
            Shape::Plane => "Plane",
            Shape::Cylinder => "Cylinder",
        };
        f.write_str(name)
    }
}

/// Rejects zero, negative and non-finite dimensions.
pub(crate) fn require_positive(what: &str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::degenerate(format!(
            "{what} must be positive and finite: {value}"
        )))
    }
}

/// Unwraps a vertex count computed with checked arithmetic, rejecting shapes
/// whose vertices would not all be addressable by `u32` indices.
pub(crate) fn require_index_space(what: &str, count: Option<u32>) -> MeshResult<u32> {
    count.ok_or_else(|| {
        MeshError::degenerate(format!("{what} has more vertices than u32 indices can address"))
    })
}

/// Adds a triangle whose indices are known to be valid.
pub(crate) fn add_triangle(mesh: &mut Mesh, a: u32, b: u32, c: u32) -> MeshResult<()> {
    mesh.add_face_default(vec![a, b, c]).map(|_| ())
}
