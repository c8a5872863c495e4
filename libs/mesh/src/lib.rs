//! # Model3D Mesh
//!
//! Index-based polygon mesh with materials, topological edit operations
//! and procedural generators.
//!
//! ## Architecture
//!
//! ```text
//! primitives (cube, sphere, plane, cylinder)
//!        ↓
//!      Mesh  ←  ops (remove, extrude, normals)
//!        ↓
//! model3d-interchange / model3d-viewport
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use model3d_mesh::primitives::create_cube;
//!
//! let mut mesh = create_cube(1.0, "Box").unwrap();
//! mesh.extrude_face(0, 0.5).unwrap();
//! mesh.calculate_normals();
//! assert_eq!(mesh.vertex_count(), 11);
//! assert_eq!(mesh.face_count(), 15);
//! ```

pub mod color;
pub mod error;
pub mod face;
pub mod material;
pub mod math;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use color::Color;
pub use error::{MeshError, MeshResult};
pub use face::{Animation, Face};
pub use material::Material;
pub use math::{Vector2, Vector3};
pub use mesh::Mesh;
