//! # Format B Exporter
//!
//! Babylon.js scene JSON with a single mesh. Face vertex lists are
//! concatenated into `indices` as-is, without triangulation.

use super::writer::{indices, number, numbers, string};
use config::constants::{BABYLON_CLEAR_COLOR, BABYLON_GRAVITY, GENERATOR_NAME, GENERATOR_VERSION};
use model3d_mesh::{Color, Material, Mesh};
use std::fmt;

/// A mesh ready to be written as Format B.
///
/// ## Example
///
/// ```rust
/// use model3d_interchange::export::BabylonDocument;
/// use model3d_mesh::primitives::create_cube;
///
/// let cube = create_cube(1.0, "Box").unwrap();
/// let text = BabylonDocument::new(&cube).to_string();
/// assert!(text.contains("\"materialId\": \"CubeMaterial\""));
/// ```
pub struct BabylonDocument<'a> {
    mesh: &'a Mesh,
}

impl<'a> BabylonDocument<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    fn write_mesh(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.mesh;
        let material_id = mesh.materials().first().map_or("", |m| m.name.as_str());

        f.write_str("  \"meshes\": [{\n    \"name\": ")?;
        string(f, mesh.name())?;
        f.write_str(",\n    \"id\": ")?;
        string(f, mesh.name())?;
        f.write_str(",\n    \"materialId\": ")?;
        string(f, material_id)?;
        f.write_str(concat!(
            ",\n",
            "    \"position\": [0, 0, 0],\n",
            "    \"rotation\": [0, 0, 0],\n",
            "    \"scaling\": [1, 1, 1],\n",
            "    \"isVisible\": true,\n",
            "    \"freezeWorldMatrix\": false,\n",
            "    \"isEnabled\": true,\n",
            "    \"checkCollisions\": false,\n",
            "    \"billboardMode\": 0,\n",
            "    \"receiveShadows\": false,\n",
        ))?;

        f.write_str("    \"positions\": ")?;
        numbers(f, mesh.vertices().iter().flat_map(|v| v.to_array()))?;
        f.write_str(",\n    \"normals\": ")?;
        numbers(f, mesh.normals().iter().flat_map(|n| n.to_array()))?;
        f.write_str(",\n    \"uvs\": ")?;
        numbers(f, mesh.uvs().iter().flat_map(|uv| uv.to_array()))?;
        f.write_str(",\n    \"indices\": ")?;
        indices(f, mesh.faces().iter().flat_map(|face| face.vertices.iter().copied()))?;
        f.write_str("\n  }],\n")
    }
}

fn write_color(f: &mut fmt::Formatter<'_>, key: &str, color: &Color) -> fmt::Result {
    write!(f, "    \"{key}\": ")?;
    numbers(f, color.rgb_array())?;
    f.write_str(",\n")
}

/// Texture slot with fixed sampling defaults; only the file name varies.
fn write_texture(f: &mut fmt::Formatter<'_>, key: &str, file: &str) -> fmt::Result {
    write!(f, ",\n    \"{key}\": {{\n      \"name\": ")?;
    string(f, file)?;
    f.write_str(concat!(
        ",\n",
        "      \"level\": 1.0,\n",
        "      \"hasAlpha\": false,\n",
        "      \"coordinatesMode\": 0,\n",
        "      \"uOffset\": 0,\n",
        "      \"vOffset\": 0,\n",
        "      \"uScale\": 1.0,\n",
        "      \"vScale\": 1.0,\n",
        "      \"uAng\": 0,\n",
        "      \"vAng\": 0,\n",
        "      \"wAng\": 0,\n",
        "      \"wrapU\": 1,\n",
        "      \"wrapV\": 1,\n",
        "      \"coordinatesIndex\": 0\n",
        "    }",
    ))
}

fn write_material(f: &mut fmt::Formatter<'_>, material: &Material) -> fmt::Result {
    f.write_str("{\n    \"name\": ")?;
    string(f, &material.name)?;
    f.write_str(",\n    \"id\": ")?;
    string(f, &material.name)?;
    f.write_str(",\n")?;
    write_color(f, "diffuse", &material.diffuse)?;
    write_color(f, "specular", &material.specular)?;
    write_color(f, "emissive", &material.emissive)?;
    write_color(f, "ambient", &material.ambient)?;
    f.write_str("    \"specularPower\": ")?;
    number(f, material.shininess)?;
    f.write_str(",\n    \"alpha\": ")?;
    number(f, material.opacity)?;
    f.write_str(",\n    \"backFaceCulling\": true,\n    \"wireframe\": false")?;

    if let Some(texture) = &material.diffuse_texture {
        write_texture(f, "diffuseTexture", texture)?;
    }
    if let Some(texture) = &material.specular_texture {
        write_texture(f, "specularTexture", texture)?;
    }

    f.write_str("\n  }")
}

impl fmt::Display for BabylonDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\n  \"producer\": {\n    \"name\": ")?;
        string(f, GENERATOR_NAME)?;
        f.write_str(",\n    \"version\": ")?;
        string(f, GENERATOR_VERSION)?;
        f.write_str(",\n    \"exporter_version\": ")?;
        string(f, GENERATOR_VERSION)?;
        f.write_str("\n  },\n  \"autoClear\": true,\n  \"clearColor\": ")?;
        numbers(f, BABYLON_CLEAR_COLOR)?;
        f.write_str(",\n  \"ambientColor\": [0, 0, 0],\n  \"gravity\": ")?;
        numbers(f, BABYLON_GRAVITY)?;
        f.write_str(",\n")?;

        self.write_mesh(f)?;

        f.write_str("  \"materials\": [")?;
        for (i, material) in self.mesh.materials().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_material(f, material)?;
        }
        f.write_str("],\n  \"cameras\": [],\n  \"lights\": []\n}")
    }
}

/// Serializes a mesh as Format B text.
pub fn export_babylon_js(mesh: &Mesh) -> String {
    BabylonDocument::new(mesh).to_string()
}
