//! # Configuration Constants
//!
//! Centralized constants for the Model3D kernel. Camera
//! defaults, interaction tuning and interchange strings are defined here.
//!
//! ## Categories
//!
//! - **Camera**: Default orientation, zoom and zoom bounds
//! - **Interaction**: Picking radius, drag thresholds and factors
//! - **Generators**: Default shape size, tessellation and names
//! - **Interchange**: Producer name and format versions
//! - **Limits**: Safety bounds for the JSON parser

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Initial pitch (rotation about the X axis) in degrees.
pub const DEFAULT_PITCH_DEG: f64 = 20.0;

/// Initial yaw (rotation about the Y axis) in degrees.
pub const DEFAULT_YAW_DEG: f64 = 45.0;

/// Initial zoom, in screen pixels per model unit.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
///
/// assert!(DEFAULT_ZOOM >= MIN_ZOOM && DEFAULT_ZOOM <= MAX_ZOOM);
/// ```
pub const DEFAULT_ZOOM: f64 = 100.0;

/// Lower zoom bound applied after every wheel step.
pub const MIN_ZOOM: f64 = 10.0;

/// Upper zoom bound applied after every wheel step.
pub const MAX_ZOOM: f64 = 500.0;

/// Zoom multiplier for one wheel step towards the scene.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier for one wheel step away from the scene.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Orbit speed in degrees per dragged pixel.
pub const ORBIT_DEGREES_PER_PIXEL: f64 = 0.5;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 600.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 400.0;

// =============================================================================
// INTERACTION CONSTANTS
// =============================================================================

/// Screen-space radius, in pixels, within which a click hits a vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::PICK_RADIUS_PX;
///
/// let distance: f64 = 7.5;
/// assert!(distance <= PICK_RADIUS_PX);
/// ```
pub const PICK_RADIUS_PX: f64 = 10.0;

/// Pointer travel, in pixels along either axis, before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Base scale applied to screen deltas when moving selected vertices.
pub const DRAG_SCALE: f64 = 0.01;

/// Zoom level at which one dragged pixel moves a vertex by `DRAG_SCALE` units.
pub const DRAG_ZOOM_REFERENCE: f64 = 100.0;

/// Distance used by the extrude shortcut.
pub const DEFAULT_EXTRUDE_DISTANCE: f64 = 0.5;

// =============================================================================
// GENERATOR CONSTANTS
// =============================================================================

/// Edge length, radius or side used when a shape is created without one.
pub const DEFAULT_SHAPE_SIZE: f64 = 2.0;

/// Segment count used when a round shape is created without one. Spheres
/// get half as many rings.
pub const DEFAULT_DETAIL: u32 = 16;

/// Cylinder height as a multiple of its radius for sized shapes.
pub const CYLINDER_HEIGHT_RATIO: f64 = 1.5;

/// Minimum segment count for any round primitive.
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum ring count for a sphere.
pub const MIN_RINGS: u32 = 2;

/// Name given to meshes created without one.
pub const DEFAULT_MESH_NAME: &str = "Untitled";

/// Name given to materials loaded without one.
pub const DEFAULT_MATERIAL_NAME: &str = "Material";

/// Shininess assigned to new materials.
pub const DEFAULT_SHININESS: f64 = 30.0;

/// Fallback face color when a face's material index does not resolve.
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f64; 4] = [0.5, 0.5, 0.5, 1.0];

/// Highlight color for selected faces and vertices.
pub const SELECTION_COLOR: [f64; 4] = [1.0, 0.78, 0.0, 1.0];

// =============================================================================
// INTERCHANGE CONSTANTS
// =============================================================================

/// Producer name written into exported files.
pub const GENERATOR_NAME: &str = "Model3DKernel";

/// Producer version written into Babylon-style exports.
pub const GENERATOR_VERSION: &str = "1.0";

/// Version number written into the Three.js-style metadata block.
pub const THREE_JS_FORMAT_VERSION: f64 = 4.5;

/// Material type written into Three.js-style exports.
pub const THREE_JS_MATERIAL_TYPE: &str = "MeshLambertMaterial";

/// Clear color written into Babylon-style scenes.
pub const BABYLON_CLEAR_COLOR: [f64; 3] = [0.2, 0.2, 0.3];

/// Scene gravity written into Babylon-style scenes.
pub const BABYLON_GRAVITY: [f64; 3] = [0.0, -9.81, 0.0];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth of JSON arrays and objects.
///
/// Prevents stack overflow from hostile or corrupted interchange files.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_NESTING_DEPTH;
///
/// let depth = 3;
/// assert!(depth < MAX_NESTING_DEPTH);
/// ```
pub const MAX_NESTING_DEPTH: usize = 256;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_zoom, MIN_ZOOM};
///
/// assert_eq!(clamp_zoom(1.0), MIN_ZOOM);
/// assert_eq!(clamp_zoom(42.0), 42.0);
/// ```
#[inline]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
