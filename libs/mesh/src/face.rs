//! # Face and Animation
//!
//! Polygon faces referencing mesh vertices by index, and the opaque
//! animation records a mesh carries along.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered polygon of vertex indices.
///
/// `normals` and `uvs` run parallel to `vertices` once populated;
/// [`Mesh::calculate_normals`](crate::Mesh::calculate_normals) fills
/// `normals`, nothing in the kernel fills `uvs`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<u32>,
    pub material_index: usize,
    pub normals: Vec<u32>,
    pub uvs: Vec<u32>,
}

impl Face {
    pub fn new(vertices: Vec<u32>, material_index: usize) -> Self {
        Self {
            vertices,
            material_index,
            normals: Vec::new(),
            uvs: Vec::new(),
        }
    }

    /// Number of vertices in the polygon.
    #[inline]
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }

    /// Edges `(v[i], v[i+1 mod n])` in polygon order.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_mesh::Face;
    ///
    /// let face = Face::new(vec![4, 5, 6], 0);
    /// let edges: Vec<_> = face.edges().collect();
    /// assert_eq!(edges, vec![(4, 5), (5, 6), (6, 4)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Named animation with opaque keyframe data. Stored, never evaluated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    /// Seconds.
    pub duration: f64,
    pub keyframes: BTreeMap<String, String>,
}

impl Animation {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            keyframes: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_new_has_empty_attribute_lists() {
        let face = Face::new(vec![0, 1, 2, 3], 2);
        assert_eq!(face.arity(), 4);
        assert_eq!(face.material_index, 2);
        assert!(face.normals.is_empty());
        assert!(face.uvs.is_empty());
    }

    #[test]
    fn test_face_edges_wrap() {
        let face = Face::new(vec![0, 1, 2, 3], 0);
        assert_eq!(face.edges().last(), Some((3, 0)));
        assert_eq!(face.edges().count(), 4);
    }

    #[test]
    fn test_animation_new() {
        let anim = Animation::new("spin", 2.5);
        assert_eq!(anim.name, "spin");
        assert!(anim.keyframes.is_empty());
    }
}
