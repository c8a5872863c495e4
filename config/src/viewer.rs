//! Viewer configuration snapshot shared by the viewport crate.
//!
//! Each field defaults to the matching constant in [`crate::constants`];
//! callers that need different tuning go through [`ViewerConfig::new`] so
//! invalid values never reach the interaction code.

use crate::constants::{
    DEFAULT_EXTRUDE_DISTANCE, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DRAG_THRESHOLD_PX,
    PICK_RADIUS_PX,
};
use std::fmt;

/// Immutable snapshot of viewer tuning values.
///
/// # Examples
/// ```
/// use config::ViewerConfig;
/// let config = ViewerConfig::default();
/// assert!(config.pick_radius > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Vertex hit radius in pixels.
    pub pick_radius: f64,
    /// Pointer travel before a press turns into a drag.
    pub drag_threshold: f64,
    /// Distance used when extruding the selected faces.
    pub extrude_distance: f64,
    /// Initial viewport width in pixels.
    pub width: f64,
    /// Initial viewport height in pixels.
    pub height: f64,
}

impl ViewerConfig {
    /// Builds a configuration, rejecting non-positive radii and sizes.
    ///
    /// # Examples
    /// ```
    /// use config::ViewerConfig;
    /// let cfg = ViewerConfig::new(6.0, 2.0, 1.0, 800.0, 600.0).expect("valid config");
    /// assert_eq!(cfg.pick_radius, 6.0);
    /// ```
    pub fn new(
        pick_radius: f64,
        drag_threshold: f64,
        extrude_distance: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, ConfigError> {
        if pick_radius.is_nan() || pick_radius <= 0.0 {
            return Err(ConfigError::InvalidPickRadius(pick_radius));
        }
        if drag_threshold.is_nan() || drag_threshold < 0.0 {
            return Err(ConfigError::InvalidDragThreshold(drag_threshold));
        }
        if !extrude_distance.is_finite() {
            return Err(ConfigError::InvalidExtrudeDistance(extrude_distance));
        }
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidViewportSize { width, height });
        }
        Ok(Self {
            pick_radius,
            drag_threshold,
            extrude_distance,
            width,
            height,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS_PX,
            drag_threshold: DRAG_THRESHOLD_PX,
            extrude_distance: DEFAULT_EXTRUDE_DISTANCE,
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the pick radius is zero, negative or NaN.
    InvalidPickRadius(f64),
    /// Raised when the drag threshold is negative or NaN.
    InvalidDragThreshold(f64),
    /// Raised when the extrusion distance is not finite.
    InvalidExtrudeDistance(f64),
    /// Raised when either viewport dimension is not positive.
    InvalidViewportSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPickRadius(value) => {
                write!(f, "pick_radius must be positive: {value}")
            }
            ConfigError::InvalidDragThreshold(value) => {
                write!(f, "drag_threshold must be >= 0: {value}")
            }
            ConfigError::InvalidExtrudeDistance(value) => {
                write!(f, "extrude_distance must be finite: {value}")
            }
            ConfigError::InvalidViewportSize { width, height } => {
                write!(f, "viewport size must be positive: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ViewerConfig::default();
        let rebuilt = ViewerConfig::new(
            cfg.pick_radius,
            cfg.drag_threshold,
            cfg.extrude_distance,
            cfg.width,
            cfg.height,
        );
        assert_eq!(rebuilt, Ok(cfg));
    }

    #[test]
    fn new_validates_inputs() {
        assert_eq!(
            ViewerConfig::new(0.0, 3.0, 0.5, 10.0, 10.0).unwrap_err(),
            ConfigError::InvalidPickRadius(0.0)
        );
        assert_eq!(
            ViewerConfig::new(10.0, -1.0, 0.5, 10.0, 10.0).unwrap_err(),
            ConfigError::InvalidDragThreshold(-1.0)
        );
        assert!(matches!(
            ViewerConfig::new(10.0, 3.0, f64::INFINITY, 10.0, 10.0),
            Err(ConfigError::InvalidExtrudeDistance(_))
        ));
        assert_eq!(
            ViewerConfig::new(10.0, 3.0, 0.5, 0.0, 10.0).unwrap_err(),
            ConfigError::InvalidViewportSize {
                width: 0.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn error_display_names_field() {
        let msg = ConfigError::InvalidPickRadius(-2.0).to_string();
        assert!(msg.contains("pick_radius"));
    }
}
