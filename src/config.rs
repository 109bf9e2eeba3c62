//! Runtime defaults for a paint session.

use crate::color::{Rgba, DEFAULT_COLOR};

/// Smallest selectable brush size in pixels.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest selectable brush size in pixels.
pub const MAX_BRUSH_SIZE: u32 = 20;

/// Initial canvas, brush and color settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSettings {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    pub brush_size: u32,
    pub color: Rgba,
    pub background: Rgba,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            brush_size: 2,
            color: Rgba::from_hex(DEFAULT_COLOR),
            background: Rgba::WHITE,
        }
    }
}

impl PaintSettings {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Brush size, clamped to the selectable range.
    pub fn with_brush_size(mut self, size: u32) -> Self {
        self.brush_size = clamp_brush_size(size);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }
}

#[inline]
pub fn clamp_brush_size(size: u32) -> u32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
