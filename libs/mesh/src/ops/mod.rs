//! # Mesh Operations
//!
//! Topological edits on a [`Mesh`](crate::Mesh):
//! - **remove**: vertex removal with face repair, face removal
//! - **extrude**: push a face out along its normal and build side walls
//! - **normals**: flat per-face normal recomputation
//!
//! All operations are methods on `Mesh` and keep face indices valid.

mod extrude;
mod normals;
mod remove;
