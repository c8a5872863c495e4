//! # Exporters
//!
//! Write-only serialization of a [`Mesh`] into the two interchange
//! formats. Output is a `String`; writing it to disk is up to the caller.
//!
//! ```text
//! Mesh → ThreeJsDocument  → Format A text (.json)
//! Mesh → BabylonDocument  → Format B text (.babylon)
//! ```

mod babylon;
mod three;
mod writer;

pub use babylon::{export_babylon_js, BabylonDocument};
pub use three::{export_three_js, ThreeJsDocument};

use log::debug;
use model3d_mesh::Mesh;
use std::fmt;

/// Interchange format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Format A: Three.js geometry JSON.
    ThreeJs,
    /// Format B: Babylon.js scene JSON.
    BabylonJs,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::ThreeJs, ExportFormat::BabylonJs];

    /// Serializes `mesh` in this format.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use model3d_interchange::ExportFormat;
    /// use model3d_mesh::primitives::create_cube;
    ///
    /// let cube = create_cube(1.0, "Box").unwrap();
    /// let text = ExportFormat::BabylonJs.export(&cube);
    /// assert!(text.starts_with("{\n  \"producer\""));
    /// ```
    pub fn export(self, mesh: &Mesh) -> String {
        let text = match self {
            ExportFormat::ThreeJs => export_three_js(mesh),
            ExportFormat::BabylonJs => export_babylon_js(mesh),
        };
        debug!(
            "exported '{}' as {self}: {} vertices, {} faces, {} bytes",
            mesh.name(),
            mesh.vertex_count(),
            mesh.face_count(),
            text.len()
        );
        text
    }

    /// File extension without the dot.
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::ThreeJs => "json",
            ExportFormat::BabylonJs => "babylon",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::ThreeJs => f.write_str("Three.js"),
            ExportFormat::BabylonJs => f.write_str("Babylon.js"),
        }
    }
}

/// Serializes `mesh` in `format`.
pub fn export(mesh: &Mesh, format: ExportFormat) -> String {
    format.export(mesh)
}
