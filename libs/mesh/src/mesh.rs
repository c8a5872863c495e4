//! # Mesh Data Structure
//!
//! Index-based polygon mesh. The mesh owns every vertex, normal, UV,
//! face, material and animation; integer indices are the only references
//! between them.

use crate::error::{MeshError, MeshResult};
use crate::face::{Animation, Face};
use crate::material::Material;
use crate::math::{triangle_normal, Vector2, Vector3};
use config::constants::DEFAULT_MESH_NAME;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A polygon mesh with materials and metadata.
///
/// All geometry is f64. Face vertex indices are always valid into
/// `vertices`: [`Mesh::add_face`] validates them and every removal
/// repairs them before returning.
///
/// # Example
///
/// ```rust
/// use model3d_mesh::Mesh;
///
/// let mut mesh = Mesh::new("Tri");
/// let a = mesh.add_vertex(0.0, 0.0, 0.0);
/// let b = mesh.add_vertex(1.0, 0.0, 0.0);
/// let c = mesh.add_vertex(0.0, 1.0, 0.0);
/// mesh.add_face_default(vec![a, b, c]).unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub(crate) name: String,
    pub(crate) vertices: Vec<Vector3>,
    pub(crate) normals: Vec<Vector3>,
    pub(crate) uvs: Vec<Vector2>,
    pub(crate) faces: Vec<Face>,
    pub(crate) materials: Vec<Material>,
    pub(crate) animations: Vec<Animation>,
    pub(crate) metadata: BTreeMap<String, String>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(DEFAULT_MESH_NAME)
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            faces: Vec::new(),
            materials: Vec::new(),
            animations: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            ..Self::new(name)
        }
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> u32 {
        push_index(&mut self.vertices, Vector3::new(x, y, z))
    }

    /// Adds a normal and returns its index.
    pub fn add_normal(&mut self, x: f64, y: f64, z: f64) -> u32 {
        push_index(&mut self.normals, Vector3::new(x, y, z))
    }

    /// Adds a texture coordinate and returns its index.
    pub fn add_uv(&mut self, u: f64, v: f64) -> u32 {
        push_index(&mut self.uvs, Vector2::new(u, v))
    }

    /// Adds a material and returns its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Adds an animation and returns its index.
    pub fn add_animation(&mut self, animation: Animation) -> usize {
        self.animations.push(animation);
        self.animations.len() - 1
    }

    /// Adds a polygon face and returns its index.
    ///
    /// The material index is not checked; renderers fall back to a
    /// default color for missing materials.
    ///
    /// # Errors
    ///
    /// - [`MeshError::TooFewVertices`] for fewer than 3 indices
    /// - [`MeshError::VertexIndexOutOfRange`] for an index past the last vertex
    ///
    /// The mesh is unchanged on error.
    pub fn add_face(&mut self, vertex_indices: Vec<u32>, material_index: usize) -> MeshResult<usize> {
        if vertex_indices.len() < 3 {
            return Err(MeshError::too_few_vertices(vertex_indices.len()));
        }
        if let Some(&bad) = vertex_indices
            .iter()
            .find(|&&i| i as usize >= self.vertices.len())
        {
            return Err(MeshError::invalid_index(bad, self.vertices.len()));
        }

        self.faces.push(Face::new(vertex_indices, material_index));
        Ok(self.faces.len() - 1)
    }

    /// Adds a face with material 0.
    pub fn add_face_default(&mut self, vertex_indices: Vec<u32>) -> MeshResult<usize> {
        self.add_face(vertex_indices, 0)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    #[inline]
    pub fn uv_count(&self) -> usize {
        self.uvs.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[Vector2] {
        &self.uvs
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn vertex(&self, index: u32) -> Option<Vector3> {
        self.vertices.get(index as usize).copied()
    }

    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Mutable access for material editing; geometry stays behind methods.
    pub fn material_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.metadata
    }

    /// Moves a vertex by `delta`. Returns false for an out-of-range index.
    pub fn translate_vertex(&mut self, index: u32, delta: Vector3) -> bool {
        match self.vertices.get_mut(index as usize) {
            Some(v) => {
                *v += delta;
                true
            }
            None => false,
        }
    }

    /// Mean position of a face's valid vertices.
    ///
    /// Returns the zero vector when the face does not exist or has no
    /// valid vertices.
    pub fn face_center(&self, face_index: usize) -> Vector3 {
        let Some(face) = self.faces.get(face_index) else {
            return Vector3::ZERO;
        };

        let (sum, count) = face
            .vertices
            .iter()
            .filter_map(|&i| self.vertex(i))
            .fold((Vector3::ZERO, 0usize), |(sum, n), v| (sum + v, n + 1));

        if count == 0 {
            Vector3::ZERO
        } else {
            sum / count as f64
        }
    }

    /// Flat unit normal from the face's first three vertices.
    ///
    /// `None` if the face does not exist or has fewer than 3 valid leading
    /// vertices; the zero vector for a degenerate (collinear) face.
    pub fn face_normal(&self, face_index: usize) -> Option<Vector3> {
        let face = self.faces.get(face_index)?;
        match face.vertices.as_slice() {
            [a, b, c, ..] => Some(triangle_normal(
                self.vertex(*a)?,
                self.vertex(*b)?,
                self.vertex(*c)?,
            )),
            _ => None,
        }
    }

    /// Axis-aligned bounding box as `(min, max)`; zeros for an empty mesh.
    pub fn bounding_box(&self) -> (Vector3, Vector3) {
        let Some((&first, rest)) = self.vertices.split_first() else {
            return (Vector3::ZERO, Vector3::ZERO);
        };

        rest.iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }
}

/// Pushes onto an index-addressed list and returns the new element's index.
fn push_index<T>(list: &mut Vec<T>, item: T) -> u32 {
    list.push(item);
    (list.len() - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new("Quad");
        mesh.add_vertex(0.0, 0.0, 0.0);
        mesh.add_vertex(2.0, 0.0, 0.0);
        mesh.add_vertex(2.0, 2.0, 0.0);
        mesh.add_vertex(0.0, 2.0, 0.0);
        mesh.add_face_default(vec![0, 1, 2, 3]).unwrap();
        mesh
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Mesh::default().name(), "Untitled");
        assert!(Mesh::default().is_empty());
    }

    #[test]
    fn test_add_returns_sequential_indices() {
        let mut mesh = Mesh::default();
        assert_eq!(mesh.add_vertex(0.0, 0.0, 0.0), 0);
        assert_eq!(mesh.add_vertex(1.0, 0.0, 0.0), 1);
        assert_eq!(mesh.add_normal(0.0, 0.0, 1.0), 0);
        assert_eq!(mesh.add_uv(0.5, 0.5), 0);
        assert_eq!(mesh.add_material(Material::new("A")), 0);
        assert_eq!(mesh.add_material(Material::new("B")), 1);
        assert_eq!(mesh.add_animation(Animation::new("idle", 1.0)), 0);
    }

    #[test]
    fn test_add_face_rejects_short_polygon() {
        let mut mesh = quad();
        let err = mesh.add_face_default(vec![0, 1]).unwrap_err();
        assert_eq!(err, MeshError::TooFewVertices { count: 2 });
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_add_face_rejects_out_of_range() {
        let mut mesh = quad();
        let err = mesh.add_face(vec![0, 1, 4], 0).unwrap_err();
        assert_eq!(err, MeshError::VertexIndexOutOfRange { index: 4, count: 4 });
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_add_face_accepts_missing_material() {
        let mut mesh = quad();
        assert_eq!(mesh.add_face(vec![0, 1, 2], 7).unwrap(), 1);
        assert_eq!(mesh.face(1).unwrap().material_index, 7);
    }

    #[test]
    fn test_queries_out_of_range() {
        let mesh = quad();
        assert_eq!(mesh.vertex(10), None);
        assert!(mesh.face(3).is_none());
        assert!(mesh.material(0).is_none());
        assert_eq!(mesh.face_center(5), Vector3::ZERO);
        assert_eq!(mesh.face_normal(5), None);
    }

    #[test]
    fn test_face_center() {
        let mesh = quad();
        let c = mesh.face_center(0);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn test_face_normal() {
        let n = quad().face_normal(0).unwrap();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn test_translate_vertex() {
        let mut mesh = quad();
        assert!(mesh.translate_vertex(1, Vector3::new(0.0, 0.0, 3.0)));
        assert_eq!(mesh.vertex(1), Some(Vector3::new(2.0, 0.0, 3.0)));
        assert!(!mesh.translate_vertex(9, Vector3::ONE));
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = quad().bounding_box();
        assert_eq!(min, Vector3::ZERO);
        assert_eq!(max, Vector3::new(2.0, 2.0, 0.0));
        assert_eq!(Mesh::default().bounding_box(), (Vector3::ZERO, Vector3::ZERO));
    }

    #[test]
    fn test_serde_snapshot() {
        let mut mesh = quad();
        mesh.add_material(Material::new("M"));
        mesh.metadata_mut().insert("author".into(), "me".into());
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
    }
}
