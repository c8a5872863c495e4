//! # Removal
//!
//! Vertex and face removal. Removing a vertex drops every face that uses
//! it and shifts the remaining face indices down so they stay valid.

use crate::mesh::Mesh;
use log::trace;

impl Mesh {
    /// Removes a vertex and every face that references it.
    ///
    /// Surviving faces have indices above `index` decremented by one.
    /// Returns false (and does nothing) for an out-of-range index.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_mesh::Mesh;
    ///
    /// let mut mesh = Mesh::default();
    /// for i in 0..4 {
    ///     mesh.add_vertex(i as f64, 0.0, 0.0);
    /// }
    /// mesh.add_face_default(vec![0, 1, 2]).unwrap();
    /// mesh.add_face_default(vec![1, 2, 3]).unwrap();
    ///
    /// assert!(mesh.remove_vertex(0));
    /// assert_eq!(mesh.face_count(), 1);
    /// assert_eq!(mesh.faces()[0].vertices, vec![0, 1, 2]);
    /// ```
    pub fn remove_vertex(&mut self, index: u32) -> bool {
        if index as usize >= self.vertices.len() {
            return false;
        }

        self.vertices.remove(index as usize);

        let before = self.faces.len();
        self.faces.retain(|face| !face.vertices.contains(&index));
        for face in &mut self.faces {
            for v in &mut face.vertices {
                if *v > index {
                    *v -= 1;
                }
            }
        }

        trace!(
            "removed vertex {index} and {} dependent face(s)",
            before - self.faces.len()
        );
        true
    }

    /// Removes a face. Returns false for an out-of-range index.
    pub fn remove_face(&mut self, index: usize) -> bool {
        if index >= self.faces.len() {
            return false;
        }
        self.faces.remove(index);
        trace!("removed face {index}");
        true
    }
}
