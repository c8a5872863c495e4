//! # Picking
//!
//! Screen-space hit testing against a projected mesh. Both pickers scan in
//! index order and return the first hit, not the nearest one.

use crate::camera::Camera;
use log::trace;
use model3d_mesh::{Mesh, Vector2};

/// First vertex whose projection lies within `radius` pixels of `point`.
pub fn pick_vertex(mesh: &Mesh, camera: &Camera, point: Vector2, radius: f64) -> Option<u32> {
    let hit = mesh
        .vertices()
        .iter()
        .position(|v| camera.project(*v).distance(point) <= radius)
        .map(|i| i as u32);
    trace!("pick_vertex at ({}, {}): {hit:?}", point.x, point.y);
    hit
}

/// First face whose projected polygon contains `point`.
///
/// Out-of-range vertex indices are left out of the polygon; faces with
/// fewer than three vertices are never hit.
pub fn pick_face(mesh: &Mesh, camera: &Camera, point: Vector2) -> Option<usize> {
    let mut polygon = Vec::new();
    let hit = mesh.faces().iter().position(|face| {
        if face.arity() < 3 {
            return false;
        }
        polygon.clear();
        polygon.extend(
            face.vertices
                .iter()
                .filter_map(|&i| mesh.vertex(i))
                .map(|v| camera.project(v)),
        );
        point_in_polygon(point, &polygon)
    });
    trace!("pick_face at ({}, {}): {hit:?}", point.x, point.y);
    hit
}

/// Even-odd ray crossing test. Points exactly on an edge may fall either
/// way.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::Vector2;
/// use model3d_viewport::point_in_polygon;
///
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(4.0, 4.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// assert!(point_in_polygon(Vector2::new(2.0, 2.0), &square));
/// assert!(!point_in_polygon(Vector2::new(5.0, 2.0), &square));
/// ```
pub fn point_in_polygon(point: Vector2, polygon: &[Vector2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in polygon {
        if (curr.y > point.y) != (prev.y > point.y) {
            let crossing = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < crossing {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}
