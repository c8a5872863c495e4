//! # Cube Primitive
//!
//! Axis-aligned cube centered on the origin.

use super::{add_triangle, require_positive};
use crate::color::Color;
use crate::error::MeshResult;
use crate::material::Material;
use crate::mesh::Mesh;

/// Triangles in fixed order: front, back, left, right, top, bottom.
#[rustfmt::skip]
const CUBE_FACES: [[u32; 3]; 12] = [
    [0, 1, 2], [0, 2, 3], // front (z = -h)
    [5, 4, 7], [5, 7, 6], // back (z = +h)
    [4, 0, 3], [4, 3, 7], // left (x = -h)
    [1, 5, 6], [1, 6, 2], // right (x = +h)
    [3, 2, 6], [3, 6, 7], // top (y = +h)
    [4, 5, 1], [4, 1, 0], // bottom (y = -h)
];

/// Creates a cube with edge length `size`.
///
/// # Returns
///
/// A mesh with 8 vertices, 4 UVs and 12 triangles.
///
/// # Example
///
/// ```rust
/// use model3d_mesh::primitives::create_cube;
///
/// let mesh = create_cube(2.0, "Box").unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// assert_eq!(mesh.materials()[0].name, "CubeMaterial");
/// ```
pub fn create_cube(size: f64, name: impl Into<String>) -> MeshResult<Mesh> {
    require_positive("Cube size", size)?;

    let mut mesh = Mesh::with_capacity(name, 8, 12);
    let h = size / 2.0;

    // Ring at z = -h, then z = +h: (-x,-y), (+x,-y), (+x,+y), (-x,+y).
    for z in [-h, h] {
        mesh.add_vertex(-h, -h, z);
        mesh.add_vertex(h, -h, z);
        mesh.add_vertex(h, h, z);
        mesh.add_vertex(-h, h, z);
    }

    mesh.add_uv(0.0, 0.0);
    mesh.add_uv(1.0, 0.0);
    mesh.add_uv(1.0, 1.0);
    mesh.add_uv(0.0, 1.0);

    for [a, b, c] in CUBE_FACES {
        add_triangle(&mut mesh, a, b, c)?;
    }

    mesh.add_material(Material::with_diffuse(
        "CubeMaterial",
        Color::rgb(0.8, 0.8, 0.8),
    ));
    mesh.calculate_normals();

    Ok(mesh)
}
