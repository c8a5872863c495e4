//! # Format A Exporter
//!
//! Three.js geometry JSON (format version 4.5).
//!
//! ## Layout
//!
//! ```text
//! { "metadata": {...}, "name": ...,
//!   "data": { "vertices", "normals", "uvs": [[...]], "faces", "materials" },
//!   "animations": [...] }            // only when the mesh has animations
//! ```
//!
//! Every face is written as tag `0`, its vertex indices, then its material
//! index, whatever its arity.

use super::writer::{indices, number, numbers, string};
use config::constants::{GENERATOR_NAME, THREE_JS_FORMAT_VERSION, THREE_JS_MATERIAL_TYPE};
use model3d_mesh::{Material, Mesh};
use std::fmt;
use uuid::Uuid;

/// Face stream tag written before every face.
const FACE_TAG: u32 = 0;

/// A mesh ready to be written as Format A.
///
/// Material UUIDs are generated once in [`ThreeJsDocument::new`], so
/// formatting the same document twice yields the same text.
///
/// ## Example
///
/// ```rust
/// use model3d_interchange::export::ThreeJsDocument;
/// use model3d_mesh::primitives::create_plane;
///
/// let plane = create_plane(1.0, 1.0, "Floor").unwrap();
/// let text = ThreeJsDocument::new(&plane).to_string();
/// assert!(text.contains("\"name\": \"Floor\""));
/// ```
pub struct ThreeJsDocument<'a> {
    mesh: &'a Mesh,
    material_ids: Vec<Uuid>,
}

impl<'a> ThreeJsDocument<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self {
            mesh,
            material_ids: mesh.materials().iter().map(|_| Uuid::new_v4()).collect(),
        }
    }

    fn write_data(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.mesh;
        f.write_str("  \"data\": {\n")?;

        f.write_str("    \"vertices\": ")?;
        numbers(f, mesh.vertices().iter().flat_map(|v| v.to_array()))?;
        f.write_str(",\n    \"normals\": ")?;
        numbers(f, mesh.normals().iter().flat_map(|n| n.to_array()))?;
        f.write_str(",\n    \"uvs\": [")?;
        numbers(f, mesh.uvs().iter().flat_map(|uv| uv.to_array()))?;
        f.write_str("],\n    \"faces\": ")?;
        indices(
            f,
            mesh.faces().iter().flat_map(|face| {
                std::iter::once(FACE_TAG)
                    .chain(face.vertices.iter().copied())
                    .chain(std::iter::once(face.material_index as u32))
            }),
        )?;

        f.write_str(",\n    \"materials\": [")?;
        for (i, (material, id)) in mesh.materials().iter().zip(&self.material_ids).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_material(f, material, id)?;
        }
        f.write_str("]\n  }")
    }

    fn write_animations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(",\n  \"animations\": [")?;
        for (i, animation) in self.mesh.animations().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("{\n    \"name\": ")?;
            string(f, &animation.name)?;
            f.write_str(",\n    \"duration\": ")?;
            number(f, animation.duration)?;
            f.write_str(",\n    \"tracks\": []\n  }")?;
        }
        f.write_str("]")
    }
}

fn write_material(f: &mut fmt::Formatter<'_>, material: &Material, id: &Uuid) -> fmt::Result {
    writeln!(f, "{{\n      \"uuid\": \"{id}\",")?;
    f.write_str("      \"type\": ")?;
    string(f, THREE_JS_MATERIAL_TYPE)?;
    f.write_str(",\n      \"name\": ")?;
    string(f, &material.name)?;
    writeln!(f, ",\n      \"color\": {},", material.diffuse.to_hex())?;
    writeln!(f, "      \"emissive\": {},", material.emissive.to_hex())?;
    writeln!(f, "      \"transparent\": {},", material.transparent)?;
    f.write_str("      \"opacity\": ")?;
    number(f, material.opacity)?;
    if let Some(map) = &material.diffuse_texture {
        f.write_str(",\n      \"map\": ")?;
        string(f, map)?;
    }
    if let Some(normal_map) = &material.normal_texture {
        f.write_str(",\n      \"normalMap\": ")?;
        string(f, normal_map)?;
    }
    f.write_str("\n    }")
}

impl fmt::Display for ThreeJsDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\n  \"metadata\": {\n    \"version\": ")?;
        number(f, THREE_JS_FORMAT_VERSION)?;
        f.write_str(",\n    \"type\": \"Geometry\",\n    \"generator\": ")?;
        string(f, GENERATOR_NAME)?;
        f.write_str("\n  },\n  \"name\": ")?;
        string(f, self.mesh.name())?;
        f.write_str(",\n")?;

        self.write_data(f)?;
        if !self.mesh.animations().is_empty() {
            self.write_animations(f)?;
        }

        f.write_str("\n}")
    }
}

/// Serializes a mesh as Format A text.
pub fn export_three_js(mesh: &Mesh) -> String {
    ThreeJsDocument::new(mesh).to_string()
}
