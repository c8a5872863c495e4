//! # Face Extrusion
//!
//! Pushes a copy of a face's outline along the face normal. The face
//! itself moves to the new outline (it becomes the cap) and one quad per
//! original edge closes the gap:
//!
//! ```text
//!   new[i] ──── new[i+1]        cap (the original face, repointed)
//!     │            │
//!   orig[i] ── orig[i+1]        side quad (orig[i], orig[i+1], new[i+1], new[i])
//! ```

#[cfg(test)]
mod tests;

use crate::face::Face;
use crate::mesh::Mesh;
use log::trace;

/// Material assigned to generated side faces.
const SIDE_MATERIAL: usize = 0;

impl Mesh {
    /// Extrudes a face by `distance` along its flat normal.
    ///
    /// A degenerate face has a zero normal, so its new vertices coincide
    /// with the originals. Normals are not recomputed; call
    /// [`Mesh::calculate_normals`] afterwards.
    ///
    /// # Returns
    ///
    /// Indices of the new cap vertices in polygon order, or `None` if the
    /// face does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use model3d_mesh::primitives::create_plane;
    ///
    /// let mut plane = create_plane(1.0, 1.0, "P").unwrap();
    /// let cap = plane.extrude_face(0, 0.5).unwrap();
    /// assert_eq!(cap, vec![4, 5, 6]);
    /// assert_eq!(plane.vertex_count(), 7);
    /// assert_eq!(plane.face_count(), 5);
    /// ```
    pub fn extrude_face(&mut self, face_index: usize, distance: f64) -> Option<Vec<u32>> {
        let offset = self.face_normal(face_index)? * distance;
        let original = self.faces.get(face_index)?.vertices.clone();

        let moved = original
            .iter()
            .map(|&v| self.vertex(v).map(|p| p + offset))
            .collect::<Option<Vec<_>>>()?;

        let cap: Vec<u32> = moved
            .into_iter()
            .map(|p| self.add_vertex(p.x, p.y, p.z))
            .collect();

        self.faces[face_index].vertices = cap.clone();

        let n = original.len();
        for i in 0..n {
            let next = (i + 1) % n;
            self.faces.push(Face::new(
                vec![original[i], original[next], cap[next], cap[i]],
                SIDE_MATERIAL,
            ));
        }

        trace!("extruded face {face_index} by {distance}: {n} side face(s)");
        Some(cap)
    }
}
