//! # Cylinder Primitive
//!
//! Capped cylinder along the Y axis, centered on the origin.

use super::{add_triangle, require_index_space, require_positive};
use crate::color::Color;
use crate::error::{MeshError, MeshResult};
use crate::material::Material;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use std::f64::consts::PI;

/// Creates a cylinder.
///
/// Vertex 0 is the bottom center, vertex 1 the top center; segment `i`
/// then adds its bottom rim vertex `2 + 2i` and top rim vertex `3 + 2i`.
/// Each segment emits a bottom fan triangle, a top fan triangle and two
/// side triangles.
///
/// # Errors
///
/// Non-positive radius or height, `segments < 3`, or more rim vertices than
/// `u32` indices can address.
///
/// # Example
///
/// ```rust
/// use model3d_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 3.0, 16, "Pipe").unwrap();
/// assert_eq!(mesh.vertex_count(), 2 + 2 * 16);
/// assert_eq!(mesh.face_count(), 4 * 16);
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    segments: u32,
    name: impl Into<String>,
) -> MeshResult<Mesh> {
    require_positive("Cylinder radius", radius)?;
    require_positive("Cylinder height", height)?;
    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Cylinder needs at least {MIN_SEGMENTS} segments, got {segments}"
        )));
    }

    let vertex_count = require_index_space(
        "Cylinder",
        segments.checked_mul(2).and_then(|rim| rim.checked_add(2)),
    )?;
    let mut mesh = Mesh::with_capacity(name, vertex_count as usize, 4 * segments as usize);
    let hh = height / 2.0;

    let bottom_center = mesh.add_vertex(0.0, -hh, 0.0);
    let top_center = mesh.add_vertex(0.0, hh, 0.0);

    for i in 0..segments {
        let t = f64::from(i) / f64::from(segments);
        let (sin, cos) = (2.0 * PI * t).sin_cos();
        let (x, z) = (radius * cos, radius * sin);

        mesh.add_vertex(x, -hh, z);
        mesh.add_vertex(x, hh, z);
        mesh.add_uv(t, 0.0);
        mesh.add_uv(t, 1.0);
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        let bottom = 2 + 2 * i;
        let bottom_next = 2 + 2 * next;
        let top = 3 + 2 * i;
        let top_next = 3 + 2 * next;

        add_triangle(&mut mesh, bottom_center, bottom_next, bottom)?;
        add_triangle(&mut mesh, top_center, top, top_next)?;
        add_triangle(&mut mesh, bottom, bottom_next, top_next)?;
        add_triangle(&mut mesh, bottom, top_next, top)?;
    }

    mesh.add_material(Material::with_diffuse(
        "CylinderMaterial",
        Color::rgb(1.0, 0.8, 0.6),
    ));
    mesh.calculate_normals();

    Ok(mesh)
}
