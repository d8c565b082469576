//! Linear RGBA colors handed to renderers.

use bytemuck::{Pod, Zeroable};

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)] // Uploaded as-is into uniform buffers
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.56, 0.56, 0.58, 1.0);
    pub const GREEN: Color = Color::new(0.2, 0.78, 0.35, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.48, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque gray with equal channels.
    #[inline]
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Channels in `[r, g, b, a]` order, the layout renderers upload.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pod_layout_matches_array() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(bytemuck::bytes_of(&color).len(), 16);
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn gray_is_opaque() {
        assert_eq!(Color::gray(0.72), Color::new(0.72, 0.72, 0.72, 1.0));
    }
}
