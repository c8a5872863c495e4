//! # Model3D Viewport
//!
//! Orthographic projection, screen-space picking and selection editing
//! over a [`model3d_mesh::Mesh`].
//!
//! ## Architecture
//!
//! ```text
//! pointer / keys → Viewport ─┬→ picking (Camera::project + hit tests) → Selection
//!                            └→ Mesh edits (move, delete, extrude)
//! Viewport → DrawList → host rasterizer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use model3d_mesh::primitives::create_cube;
//! use model3d_viewport::{EditMode, Viewport};
//!
//! let mut mesh = create_cube(1.0, "Box").unwrap();
//! let mut view = Viewport::default();
//! view.set_mode(EditMode::Vertex);
//!
//! let target = view.camera().project(mesh.vertices()[6]);
//! view.press(&mesh, target, false);
//! assert!(view.selection().contains_vertex(6));
//!
//! view.delete_selected(&mut mesh);
//! assert_eq!(mesh.vertex_count(), 7);
//! ```

pub mod camera;
pub mod draw;
pub mod picking;
pub mod selection;
pub mod viewport;

pub use camera::Camera;
pub use draw::{DrawList, EdgeLine, FacePolygon, Marker};
pub use picking::{pick_face, pick_vertex, point_in_polygon};
pub use selection::{EditMode, Selection, Tool};
pub use viewport::{DragEffect, Viewport};
