//! # Mesh Errors
//!
//! Error types for mesh construction and procedural generation.

use thiserror::Error;

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building a mesh.
///
/// Index misuse on queries and removals is not an error: those return
/// `None` or `false`. Only construction paths report failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Face has fewer than three vertex indices
    #[error("Face needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// Face references a vertex that does not exist
    #[error("Vertex index {index} out of range (vertex count: {count})")]
    VertexIndexOutOfRange { index: u32, count: usize },

    /// Degenerate generator parameters
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },
}

impl MeshError {
    /// Creates a too-few-vertices error.
    pub fn too_few_vertices(count: usize) -> Self {
        Self::TooFewVertices { count }
    }

    /// Creates an out-of-range vertex index error.
    pub fn invalid_index(index: u32, count: usize) -> Self {
        Self::VertexIndexOutOfRange { index, count }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}
