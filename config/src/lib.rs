//! # Config Crate
//!
//! Centralized configuration constants for the Model3D kernel.
//! Camera defaults, picking radii, drag factors, generator defaults and
//! interchange producer strings are defined here so the mesh, interchange
//! and viewport crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_zoom, DEFAULT_ZOOM, MAX_ZOOM, PICK_RADIUS_PX};
//!
//! let zoom = clamp_zoom(DEFAULT_ZOOM * 10.0);
//! assert_eq!(zoom, MAX_ZOOM);
//! assert!(PICK_RADIUS_PX > 0.0);
//! ```
//!
//! ```rust
//! use config::ViewerConfig;
//!
//! let cfg = ViewerConfig::default();
//! assert_eq!(cfg.pick_radius, 10.0);
//! ```

pub mod constants;
pub mod viewer;

pub use viewer::{ConfigError, ViewerConfig};
