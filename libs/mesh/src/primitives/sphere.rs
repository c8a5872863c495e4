//! # Sphere Primitive
//!
//! UV sphere: `rings + 1` latitude rows of `segments` vertices, from the
//! north pole (+Y) to the south pole.

use super::{add_triangle, require_index_space, require_positive};
use crate::color::Color;
use crate::error::{MeshError, MeshResult};
use crate::material::Material;
use crate::mesh::Mesh;
use config::constants::{MIN_RINGS, MIN_SEGMENTS};
use std::f64::consts::PI;

/// Creates a UV sphere.
///
/// Vertex `(ring, seg)` sits at `(r sinθ cosφ, r cosθ, r sinθ sinφ)` with
/// `θ = π·ring/rings`, `φ = 2π·seg/segments`, and UV
/// `(seg/segments, ring/rings)`. The degenerate triangles touching the
/// pole rows are skipped.
///
/// # Errors
///
/// Non-positive radius, `segments < 3`, `rings < 2`, or a grid with more
/// vertices than `u32` indices can address.
///
/// # Example
///
/// ```rust
/// use model3d_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(1.0, 8, 4, "Ball").unwrap();
/// assert_eq!(mesh.vertex_count(), 5 * 8);
/// assert_eq!(mesh.face_count(), 2 * 8 * 3);
/// ```
pub fn create_sphere(
    radius: f64,
    segments: u32,
    rings: u32,
    name: impl Into<String>,
) -> MeshResult<Mesh> {
    require_positive("Sphere radius", radius)?;
    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere needs at least {MIN_SEGMENTS} segments, got {segments}"
        )));
    }
    if rings < MIN_RINGS {
        return Err(MeshError::degenerate(format!(
            "Sphere needs at least {MIN_RINGS} rings, got {rings}"
        )));
    }

    let vertex_count = require_index_space(
        "Sphere",
        rings.checked_add(1).and_then(|rows| rows.checked_mul(segments)),
    )?;
    let face_count = 2 * (rings as usize - 1) * segments as usize;
    let mut mesh = Mesh::with_capacity(name, vertex_count as usize, face_count);

    for ring in 0..=rings {
        let theta = PI * f64::from(ring) / f64::from(rings);
        let (sin_theta, cos_theta) = theta.sin_cos();

        for seg in 0..segments {
            let phi = 2.0 * PI * f64::from(seg) / f64::from(segments);
            let (sin_phi, cos_phi) = phi.sin_cos();

            mesh.add_vertex(
                radius * sin_theta * cos_phi,
                radius * cos_theta,
                radius * sin_theta * sin_phi,
            );
            mesh.add_uv(
                f64::from(seg) / f64::from(segments),
                f64::from(ring) / f64::from(rings),
            );
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let next_seg = (seg + 1) % segments;
            let current = ring * segments + seg;
            let next_ring = (ring + 1) * segments + seg;
            let next_segment = ring * segments + next_seg;
            let next_both = (ring + 1) * segments + next_seg;

            if ring != 0 {
                add_triangle(&mut mesh, current, next_ring, next_segment)?;
            }
            if ring != rings - 1 {
                add_triangle(&mut mesh, next_segment, next_ring, next_both)?;
            }
        }
    }

    mesh.add_material(Material::with_diffuse(
        "SphereMaterial",
        Color::rgb(0.7, 0.7, 1.0),
    ));
    mesh.calculate_normals();

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere(2.0, 32, 16, "S").unwrap();
        assert_eq!(mesh.vertex_count(), 17 * 32);
        assert_eq!(mesh.uv_count(), 17 * 32);
        assert_eq!(mesh.face_count(), 2 * 15 * 32);
        assert_eq!(mesh.materials()[0].name, "SphereMaterial");
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mesh = create_sphere(2.5, 12, 6, "S").unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sphere_poles() {
        let mesh = create_sphere(1.0, 4, 2, "S").unwrap();
        assert_relative_eq!(mesh.vertex(0).unwrap().y, 1.0);
        assert_relative_eq!(mesh.vertex(8).unwrap().y, -1.0);
    }

    #[test]
    fn test_sphere_first_faces() {
        let mesh = create_sphere(1.0, 4, 2, "S").unwrap();
        // ring 0 emits only the lower triangle of each quad
        assert_eq!(mesh.faces()[0].vertices, vec![1, 4, 5]);
        // ring 1 (the last) emits only the upper triangle
        assert_eq!(mesh.faces()[4].vertices, vec![4, 8, 5]);
    }

    #[test]
    fn test_sphere_invalid_parameters() {
        assert!(create_sphere(1.0, 2, 8, "S").is_err());
        assert!(create_sphere(1.0, 8, 1, "S").is_err());
        assert!(create_sphere(0.0, 8, 8, "S").is_err());
    }

    #[test]
    fn test_sphere_too_many_vertices() {
        let err = create_sphere(1.0, 65_536, 65_536, "S").unwrap_err();
        assert!(matches!(err, MeshError::Degenerate { .. }));
        assert!(create_sphere(1.0, u32::MAX, 2, "S").is_err());
        assert!(create_sphere(1.0, 3, u32::MAX, "S").is_err());
    }
}
