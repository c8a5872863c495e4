//! # Color
//!
//! RGBA color with f64 channels in [0, 1], packable to the 24-bit
//! `0xRRGGBB` integers used by interchange formats.

use serde::{Deserialize, Serialize};

/// An RGBA color.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::Color;
///
/// let c = Color::rgb(1.0, 0.5, 0.0);
/// assert_eq!(c.to_hex(), 0xFF7F00);
/// assert_eq!(c.to_hex_string(), "#ff7f00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Color from a `[r, g, b, a]` array such as the config defaults.
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Packs to `(R << 16) | (G << 8) | B`, each channel `trunc(c * 255)`.
    pub fn to_hex(&self) -> u32 {
        let [r, g, b] = self.bytes();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Unpacks a 24-bit integer; bits above 24 are ignored, alpha is 1.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xFF) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// `#rrggbb` in lower case.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b] = self.bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `[r, g, b]` without alpha.
    pub fn rgb_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    fn bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(channel_byte)
    }
}

// NaN maps to 0 through the saturating cast.
fn channel_byte(c: f64) -> u8 {
    (c * 255.0).trunc().clamp(0.0, 255.0) as u8
}
