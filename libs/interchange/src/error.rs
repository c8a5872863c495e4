//! # Load Errors
//!
//! A single error type for everything that can go wrong between JSON
//! text and a finished [`Mesh`](model3d_mesh::Mesh). The underlying cause
//! stays reachable through [`std::error::Error::source`].

use model3d_json::{ParseError, ShapeError};
use model3d_mesh::MeshError;
use thiserror::Error;

/// Result type alias for loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure to turn an interchange document into a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Parse(#[from] ParseError),

    /// A value at `path` has the wrong JSON shape
    #[error("Unexpected value at {path}: {source}")]
    Shape {
        path: String,
        #[source]
        source: ShapeError,
    },

    /// The mesh rejected a face
    #[error("Invalid mesh data: {0}")]
    Mesh(#[from] MeshError),

    /// Well-formed JSON with an impossible layout
    #[error("Malformed document: {message}")]
    Malformed { message: String },
}

impl LoadError {
    /// Creates a shape error for the value at `path`.
    pub fn shape(path: impl Into<String>, source: ShapeError) -> Self {
        Self::Shape {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model3d_json::ValueKind;
    use std::error::Error;

    #[test]
    fn test_shape_keeps_source() {
        let err = LoadError::shape(
            "data.vertices",
            ShapeError::TypeMismatch {
                expected: ValueKind::Array,
                found: ValueKind::Object,
            },
        );
        assert_eq!(
            err.to_string(),
            "Unexpected value at data.vertices: expected array, found object"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: LoadError = MeshError::too_few_vertices(1).into();
        assert!(matches!(err, LoadError::Mesh(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_has_no_source() {
        let err = LoadError::malformed("odd vertex count");
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Malformed document: odd vertex count");
    }
}
