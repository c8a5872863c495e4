//! # Plane Primitive
//!
//! Rectangle in the XZ plane, centered on the origin.

use super::{add_triangle, require_positive};
use crate::color::Color;
use crate::error::MeshResult;
use crate::material::Material;
use crate::mesh::Mesh;

/// Creates a `width` × `height` plane at `y = 0` with two triangles.
///
/// # Example
///
/// ```rust
/// use model3d_mesh::primitives::create_plane;
///
/// let mesh = create_plane(4.0, 2.0, "Floor").unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 2);
/// ```
pub fn create_plane(width: f64, height: f64, name: impl Into<String>) -> MeshResult<Mesh> {
    require_positive("Plane width", width)?;
    require_positive("Plane height", height)?;

    let mut mesh = Mesh::with_capacity(name, 4, 2);
    let hw = width / 2.0;
    let hh = height / 2.0;

    mesh.add_vertex(-hw, 0.0, -hh);
    mesh.add_vertex(hw, 0.0, -hh);
    mesh.add_vertex(hw, 0.0, hh);
    mesh.add_vertex(-hw, 0.0, hh);

    mesh.add_uv(0.0, 0.0);
    mesh.add_uv(1.0, 0.0);
    mesh.add_uv(1.0, 1.0);
    mesh.add_uv(0.0, 1.0);

    add_triangle(&mut mesh, 0, 1, 2)?;
    add_triangle(&mut mesh, 0, 2, 3)?;

    mesh.add_material(Material::with_diffuse(
        "PlaneMaterial",
        Color::rgb(0.8, 1.0, 0.8),
    ));
    mesh.calculate_normals();

    Ok(mesh)
}
