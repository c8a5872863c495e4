//! # Material
//!
//! Surface description referenced by faces through `material_index`.

use crate::color::Color;
use config::constants::DEFAULT_SHININESS;
use serde::{Deserialize, Serialize};

/// A named material with Phong-style color channels.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::{Color, Material};
///
/// let m = Material::with_diffuse("Red", Color::rgb(1.0, 0.0, 0.0));
/// assert_eq!(m.diffuse.to_hex(), 0xFF0000);
/// assert_eq!(m.emissive, Color::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    pub ambient: Color,
    pub shininess: f64,
    /// In [0, 1].
    pub opacity: f64,
    pub transparent: bool,
    pub diffuse_texture: Option<String>,
    pub normal_texture: Option<String>,
    pub specular_texture: Option<String>,
}

impl Material {
    /// White diffuse, specular and ambient, black emissive, opaque.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: Color::WHITE,
            specular: Color::WHITE,
            emissive: Color::BLACK,
            ambient: Color::WHITE,
            shininess: DEFAULT_SHININESS,
            opacity: 1.0,
            transparent: false,
            diffuse_texture: None,
            normal_texture: None,
            specular_texture: None,
        }
    }

    pub fn with_diffuse(name: impl Into<String>, diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Self::new(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = Material::new("M");
        assert_eq!(m.name, "M");
        assert_eq!(m.diffuse, Color::WHITE);
        assert_eq!(m.ambient, Color::WHITE);
        assert_eq!(m.shininess, 30.0);
        assert_eq!(m.opacity, 1.0);
        assert!(!m.transparent);
        assert!(m.diffuse_texture.is_none());
    }
}
