//! # Flat Normals
//!
//! One normal per face, shared by all of its vertices. No smoothing
//! across adjacent faces.

use crate::mesh::Mesh;
use log::trace;

impl Mesh {
    /// Rebuilds the normal list from scratch.
    ///
    /// Every face with at least three vertices gets one unit normal
    /// (zero for a degenerate face) appended to the normal list, and that
    /// index is written to each of its per-vertex normal slots. Other
    /// faces end up with an empty normal list.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_mesh::primitives::create_plane;
    ///
    /// let mut plane = create_plane(2.0, 2.0, "P").unwrap();
    /// plane.calculate_normals();
    /// assert_eq!(plane.normal_count(), 2);
    /// assert_eq!(plane.faces()[1].normals, vec![1, 1, 1]);
    /// ```
    pub fn calculate_normals(&mut self) {
        self.normals.clear();

        for face_index in 0..self.faces.len() {
            let slots = match self.face_normal(face_index) {
                Some(n) => {
                    self.normals.push(n);
                    let normal_index = (self.normals.len() - 1) as u32;
                    vec![normal_index; self.faces[face_index].arity()]
                }
                None => Vec::new(),
            };
            self.faces[face_index].normals = slots;
        }

        trace!(
            "recomputed {} flat normal(s) for {} face(s)",
            self.normals.len(),
            self.faces.len()
        );
    }
}
