//! # Model3D Interchange
//!
//! JSON interchange for meshes: a Format A (Three.js geometry) loader and
//! exporters for Format A and Format B (Babylon.js scene).
//!
//! ## Architecture
//!
//! ```text
//! text → model3d-json (Value) → loader → Mesh
//! Mesh → export (ThreeJsDocument | BabylonDocument) → text
//! ```
//!
//! Round trips are semantic, not byte-identical: counts, positions and
//! materials survive, float formatting and UUIDs do not.
//!
//! ## Example
//!
//! ```rust
//! use model3d_interchange::{export_three_js, load_three_js};
//! use model3d_mesh::primitives::create_cube;
//!
//! let cube = create_cube(1.0, "Box").unwrap();
//! let reloaded = load_three_js(&export_three_js(&cube)).unwrap();
//! assert_eq!(reloaded.vertex_count(), 8);
//! assert_eq!(reloaded.face_count(), 12);
//! ```

pub mod error;
pub mod export;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use export::{export, export_babylon_js, export_three_js, ExportFormat};
pub use loader::load_three_js;
