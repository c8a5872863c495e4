//! # Format A Loader
//!
//! Reads Three.js geometry JSON into a [`Mesh`]. Absent sections are
//! treated as empty; present sections must have the right shape.
//!
//! ## Face Stream
//!
//! ```text
//! faces = (tag indices material?)*
//! tag 0 → 3 vertex indices     tag 1 → 4 vertex indices
//! ```
//!
//! The trailing material index is read whenever a token remains. Any
//! other tag is skipped on its own and reading resumes at the next token.

use crate::error::{LoadError, LoadResult};
use config::constants::DEFAULT_MATERIAL_NAME;
use log::{debug, warn};
use model3d_json::{Object, Value};
use model3d_mesh::{Animation, Color, Material, Mesh};

const TRIANGLE_TAG: i64 = 0;
const QUAD_TAG: i64 = 1;

/// Loads a mesh from Format A text.
///
/// # Errors
///
/// Wraps the first failure from parsing, value shapes, face validation
/// or an impossible layout (e.g. a vertex list not made of triples).
///
/// # Example
///
/// ```rust
/// use model3d_interchange::load_three_js;
///
/// let text = r#"{
///     "name": "Tri",
///     "data": { "vertices": [0,0,0, 1,0,0, 0,1,0], "faces": [0, 0,1,2, 0] }
/// }"#;
/// let mesh = load_three_js(text).unwrap();
/// assert_eq!(mesh.name(), "Tri");
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn load_three_js(text: &str) -> LoadResult<Mesh> {
    let document = model3d_json::parse(text)?;
    let root = document
        .as_object()
        .map_err(|e| LoadError::shape("document root", e))?;

    let mut mesh = Mesh::default();

    if let Some(metadata) = root.get("metadata") {
        read_metadata(&mut mesh, object_at(metadata, "metadata")?);
        if let Some(generator) = metadata.get("generator") {
            mesh.set_name(str_at(generator, "metadata.generator")?);
        }
    }

    if let Some(name) = root.get("name") {
        mesh.set_name(str_at(name, "name")?);
    }

    if let Some(data) = root.get("data") {
        read_data(&mut mesh, object_at(data, "data")?)?;
    }

    if let Some(animations) = root.get("animations") {
        read_animations(&mut mesh, array_at(animations, "animations")?)?;
    }

    debug!(
        "loaded '{}': {} vertices, {} faces, {} materials",
        mesh.name(),
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.material_count()
    );
    Ok(mesh)
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Copies scalar metadata entries as text.
fn read_metadata(mesh: &mut Mesh, metadata: &Object) {
    for (key, value) in metadata {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(_) | Value::Bool(_) => value.to_string(),
            _ => continue,
        };
        mesh.metadata_mut().insert(key.clone(), text);
    }
}

fn read_data(mesh: &mut Mesh, data: &Object) -> LoadResult<()> {
    if let Some(vertices) = data.get("vertices") {
        for [x, y, z] in triples(vertices, "data.vertices")? {
            mesh.add_vertex(x, y, z);
        }
    }

    if let Some(normals) = data.get("normals") {
        for [x, y, z] in triples(normals, "data.normals")? {
            mesh.add_normal(x, y, z);
        }
    }

    // Only the first UV layer, and only in the nested form.
    if let Some(Value::Array(layers)) = data.get("uvs") {
        if let Some(first @ Value::Array(_)) = layers.first() {
            let flat = numbers_at(first, "data.uvs[0]")?;
            if flat.len() % 2 != 0 {
                return Err(LoadError::malformed(format!(
                    "data.uvs[0] has {} values, expected pairs",
                    flat.len()
                )));
            }
            for pair in flat.chunks_exact(2) {
                mesh.add_uv(pair[0], pair[1]);
            }
        }
    }

    if let Some(materials) = data.get("materials") {
        for (i, entry) in array_at(materials, "data.materials")?.iter().enumerate() {
            let path = format!("data.materials[{i}]");
            mesh.add_material(read_material(object_at(entry, &path)?, &path)?);
        }
    }

    if let Some(faces) = data.get("faces") {
        read_faces(mesh, array_at(faces, "data.faces")?)?;
    }

    Ok(())
}

fn read_material(entry: &Object, path: &str) -> LoadResult<Material> {
    let name = match entry.get("name") {
        Some(name) => str_at(name, &format!("{path}.name"))?,
        None => DEFAULT_MATERIAL_NAME,
    };
    let mut material = Material::new(name);

    if let Some(color) = entry.get("color") {
        material.diffuse = packed_color(color, &format!("{path}.color"))?;
    }
    if let Some(emissive) = entry.get("emissive") {
        material.emissive = packed_color(emissive, &format!("{path}.emissive"))?;
    }
    if let Some(opacity) = entry.get("opacity") {
        material.opacity = opacity
            .as_f64()
            .map_err(|e| LoadError::shape(format!("{path}.opacity"), e))?;
    }
    if let Some(transparent) = entry.get("transparent") {
        material.transparent = transparent
            .as_bool()
            .map_err(|e| LoadError::shape(format!("{path}.transparent"), e))?;
    }
    if let Some(map) = entry.get("map") {
        material.diffuse_texture = Some(str_at(map, &format!("{path}.map"))?.to_string());
    }
    if let Some(normal_map) = entry.get("normalMap") {
        material.normal_texture = Some(str_at(normal_map, &format!("{path}.normalMap"))?.to_string());
    }

    Ok(material)
}

fn read_faces(mesh: &mut Mesh, stream: &[Value]) -> LoadResult<()> {
    let mut tokens = stream.iter().enumerate();

    while let Some((position, tag)) = tokens.next() {
        let tag = tag
            .as_i64()
            .map_err(|e| LoadError::shape(format!("data.faces[{position}]"), e))?;

        let arity = match tag {
            TRIANGLE_TAG => 3,
            QUAD_TAG => 4,
            other => {
                warn!("skipping unknown face tag {other} at data.faces[{position}]");
                continue;
            }
        };

        let mut vertices = Vec::with_capacity(arity);
        for _ in 0..arity {
            let (at, token) = tokens.next().ok_or_else(|| {
                LoadError::malformed(format!(
                    "face at data.faces[{position}] needs {arity} vertex indices"
                ))
            })?;
            vertices.push(u32_at(token, at)?);
        }

        let material = match tokens.next() {
            Some((at, token)) => u32_at(token, at)? as usize,
            None => 0,
        };

        mesh.add_face(vertices, material)?;
    }

    Ok(())
}

fn read_animations(mesh: &mut Mesh, entries: &[Value]) -> LoadResult<()> {
    for (i, entry) in entries.iter().enumerate() {
        let path = format!("animations[{i}]");
        let entry = object_at(entry, &path)?;

        let name = match entry.get("name") {
            Some(name) => str_at(name, &format!("{path}.name"))?,
            None => "",
        };
        let duration = match entry.get("duration") {
            Some(d) => d
                .as_f64()
                .map_err(|e| LoadError::shape(format!("{path}.duration"), e))?,
            None => 0.0,
        };
        mesh.add_animation(Animation::new(name, duration));
    }
    Ok(())
}

// =============================================================================
// VALUE HELPERS
// =============================================================================

fn object_at<'v>(value: &'v Value, path: &str) -> LoadResult<&'v Object> {
    value.as_object().map_err(|e| LoadError::shape(path, e))
}

fn array_at<'v>(value: &'v Value, path: &str) -> LoadResult<&'v [Value]> {
    value.as_array().map_err(|e| LoadError::shape(path, e))
}

fn str_at<'v>(value: &'v Value, path: &str) -> LoadResult<&'v str> {
    value.as_str().map_err(|e| LoadError::shape(path, e))
}

fn u32_at(value: &Value, position: usize) -> LoadResult<u32> {
    value
        .as_u32()
        .map_err(|e| LoadError::shape(format!("data.faces[{position}]"), e))
}

fn numbers_at(value: &Value, path: &str) -> LoadResult<Vec<f64>> {
    array_at(value, path)?
        .iter()
        .enumerate()
        .map(|(i, n)| n.as_f64().map_err(|e| LoadError::shape(format!("{path}[{i}]"), e)))
        .collect()
}

fn triples(value: &Value, path: &str) -> LoadResult<Vec<[f64; 3]>> {
    let flat = numbers_at(value, path)?;
    if flat.len() % 3 != 0 {
        return Err(LoadError::malformed(format!(
            "{path} has {} values, expected triples",
            flat.len()
        )));
    }
    Ok(flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect())
}

/// Reads a packed `0xRRGGBB` integer; bits above 24 are ignored.
fn packed_color(value: &Value, path: &str) -> LoadResult<Color> {
    let packed = value.as_i64().map_err(|e| LoadError::shape(path, e))?;
    Ok(Color::from_hex((packed & 0xFF_FFFF) as u32))
}
