//! # Camera
//!
//! Orthographic orbit camera. Mesh-space points are rotated about Y by the
//! yaw, then about X by the pitch, scaled by the zoom and offset to the
//! viewport center plus pan.
//!
//! ```text
//! x' = x·cos(yaw) − z·sin(yaw)
//! z' = x·sin(yaw) + z·cos(yaw)
//! y' = y·cos(pitch) − z'·sin(pitch)
//! screen = (x'·zoom + w/2 + pan.x, y'·zoom + h/2 + pan.y)
//! ```
//!
//! Screen Y grows downward, so mesh +Y lands below the center.

use config::constants::{
    clamp_zoom, DEFAULT_PITCH_DEG, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DEFAULT_YAW_DEG,
    DEFAULT_ZOOM, DRAG_SCALE, DRAG_ZOOM_REFERENCE, ORBIT_DEGREES_PER_PIXEL, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};
use model3d_mesh::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Orbit camera state.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::Vector3;
/// use model3d_viewport::Camera;
///
/// let camera = Camera::default();
/// let center = camera.project(Vector3::ZERO);
/// assert_eq!(center.x, 300.0);
/// assert_eq!(center.y, 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Rotation about X in degrees.
    pub pitch_deg: f64,
    /// Rotation about Y in degrees.
    pub yaw_deg: f64,
    /// Pixels per mesh unit.
    pub zoom: f64,
    /// Screen offset in pixels.
    pub pan: Vector2,
    pub width: f64,
    pub height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl Camera {
    /// Default orientation for a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            pitch_deg: DEFAULT_PITCH_DEG,
            yaw_deg: DEFAULT_YAW_DEG,
            zoom: DEFAULT_ZOOM,
            pan: Vector2::ZERO,
            width,
            height,
        }
    }

    /// Maps a mesh-space point to screen pixels.
    pub fn project(&self, point: Vector3) -> Vector2 {
        let (sin_yaw, cos_yaw) = self.yaw_deg.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch_deg.to_radians().sin_cos();

        let x = point.x * cos_yaw - point.z * sin_yaw;
        let z = point.x * sin_yaw + point.z * cos_yaw;
        let y = point.y * cos_pitch - z * sin_pitch;

        Vector2::new(
            x * self.zoom + self.width / 2.0 + self.pan.x,
            y * self.zoom + self.height / 2.0 + self.pan.y,
        )
    }

    /// Rotates by a pointer delta: horizontal travel turns the yaw,
    /// vertical travel the pitch. Pitch is not clamped.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.yaw_deg += dx * ORBIT_DEGREES_PER_PIXEL;
        self.pitch_deg += dy * ORBIT_DEGREES_PER_PIXEL;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom * ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom * ZOOM_OUT_FACTOR);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan += Vector2::new(dx, dy);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Restores orientation, zoom and pan; the viewport size is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.width, self.height);
    }

    /// Mesh-space distance covered by one pixel of pointer travel when
    /// dragging a selection.
    pub fn drag_factor(&self) -> f64 {
        DRAG_SCALE / self.zoom * DRAG_ZOOM_REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::{MAX_ZOOM, MIN_ZOOM};

    fn flat() -> Camera {
        Camera {
            pitch_deg: 0.0,
            yaw_deg: 0.0,
            ..Camera::default()
        }
    }

    #[test]
    fn test_identity_orientation() {
        let p = flat().project(Vector3::new(1.0, 2.0, 5.0));
        assert_relative_eq!(p.x, 400.0);
        assert_relative_eq!(p.y, 400.0);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let camera = Camera {
            yaw_deg: 90.0,
            ..flat()
        };
        // x' = -z
        let p = camera.project(Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pitch_uses_rotated_depth() {
        let camera = Camera {
            pitch_deg: 90.0,
            ..flat()
        };
        let p = camera.project(Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.x, 300.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pan_offsets_projection() {
        let mut camera = flat();
        camera.pan_by(10.0, -5.0);
        let p = camera.project(Vector3::ZERO);
        assert_relative_eq!(p.x, 310.0);
        assert_relative_eq!(p.y, 195.0);
    }

    #[test]
    fn test_orbit_half_degree_per_pixel() {
        let mut camera = Camera::default();
        camera.orbit(10.0, -4.0);
        assert_relative_eq!(camera.yaw_deg, 50.0);
        assert_relative_eq!(camera.pitch_deg, 18.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.zoom_in();
        }
        assert_relative_eq!(camera.zoom, MAX_ZOOM);
        for _ in 0..100 {
            camera.zoom_out();
        }
        assert_relative_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_reset_keeps_size() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.orbit(30.0, 30.0);
        camera.zoom_in();
        camera.pan_by(4.0, 4.0);
        camera.reset();
        assert_eq!(camera, Camera::new(800.0, 600.0));
    }

    #[test]
    fn test_drag_factor_at_default_zoom() {
        assert_relative_eq!(Camera::default().drag_factor(), 0.01);
    }

    #[test]
    fn test_state_serializes() {
        let camera = Camera::default();
        let json = serde_json::to_string(&camera).unwrap();
        let back: Camera = serde_json::from_str(&json).unwrap();
        assert_eq!(back, camera);
    }
}
