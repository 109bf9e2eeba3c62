//! Paint tools and the pointer-gesture state machine.
//!
//! [`PaintCanvas`] owns the drawing surface and translates pointer events
//! into drawing and fill calls:
//!
//! | Tool | down | move | up |
//! |------|------|------|----|
//! | pen | start stroke | stroke from last point | end |
//! | eraser | start stroke | erase from last point | end |
//! | bucket | flood fill at the pixel | - | - |
//! | line / rectangle / circle | remember start | - | draw shape start→up |

use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;
use crate::config::{clamp_brush_size, PaintSettings};
use crate::draw::{self, Composite, Point};
use crate::error::{PaintError, Result};
use crate::export;
use crate::fill::flood_fill;
use crate::raster::RasterBuffer;

/// Toolbar tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Pen,
    Bucket,
    Line,
    Rectangle,
    Circle,
    Eraser,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Bucket,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Eraser,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Bucket => "bucket",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Eraser => "eraser",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Bucket => "Paint Bucket",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Eraser => "Eraser",
        }
    }

    /// Tools that draw a shape on release.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Circle)
    }
}

impl FromStr for Tool {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| PaintError::UnknownTool(s.to_string()))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-screen rectangle of the canvas element, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space pointer position to canvas pixel space.
///
/// The canvas may be displayed scaled; a degenerate rect axis maps 1:1.
pub fn client_to_canvas(
    client_x: f32,
    client_y: f32,
    rect: CanvasRect,
    canvas_width: usize,
    canvas_height: usize,
) -> Point {
    let scale = |canvas: usize, shown: f32| {
        if shown > 0.0 {
            canvas as f32 / shown
        } else {
            1.0
        }
    };
    Point::new(
        (client_x - rect.left) * scale(canvas_width, rect.width),
        (client_y - rect.top) * scale(canvas_height, rect.height),
    )
}

/// Drawing surface plus the active tool, color and gesture state.
#[derive(Debug, Clone)]
pub struct PaintCanvas {
    surface: RasterBuffer,
    background: Rgba,
    tool: Tool,
    color: Rgba,
    brush_size: u32,
    drawing: bool,
    start: Point,
    last: Point,
}

impl PaintCanvas {
    /// White canvas with default tool, color and brush.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_settings(&PaintSettings::default().with_size(width, height))
    }

    pub fn with_settings(settings: &PaintSettings) -> Result<Self> {
        Ok(Self {
            surface: RasterBuffer::filled(settings.width, settings.height, settings.background)?,
            background: settings.background,
            tool: Tool::default(),
            color: settings.color,
            brush_size: clamp_brush_size(settings.brush_size),
            drawing: false,
            start: Point::default(),
            last: Point::default(),
        })
    }

    pub fn surface(&self) -> &RasterBuffer {
        &self.surface
    }

    pub fn width(&self) -> usize {
        self.surface.width()
    }

    pub fn height(&self) -> usize {
        self.surface.height()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Set the color from a hex string (opaque black if malformed).
    pub fn set_color_hex(&mut self, hex: &str) {
        self.color = Rgba::from_hex(hex);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = clamp_brush_size(size);
    }

    pub fn pointer_down(&mut self, pos: Point) {
        tracing::trace!(tool = %self.tool, x = pos.x, y = pos.y, "pointer down");
        self.start = pos;
        self.last = pos;
        self.drawing = true;

        if self.tool == Tool::Bucket {
            let (x, y) = pos.pixel();
            if self.surface.contains(x, y) {
                self.surface = flood_fill(&self.surface, x, y, self.color);
            } else {
                tracing::warn!(x, y, "bucket click outside canvas ignored");
            }
            // bucket never drags
            self.drawing = false;
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if !self.drawing {
            return;
        }
        let mode = match self.tool {
            Tool::Pen => Composite::SourceOver,
            Tool::Eraser => Composite::DestinationOut,
            _ => return,
        };
        let color = if mode == Composite::DestinationOut {
            Rgba::BLACK
        } else {
            self.color
        };
        draw::stroke_segment(&mut self.surface, self.last, pos, self.brush_size as f32, color, mode);
        self.last = pos;
    }

    pub fn pointer_up(&mut self, pos: Point) {
        if !self.drawing {
            return;
        }
        tracing::trace!(tool = %self.tool, x = pos.x, y = pos.y, "pointer up");
        self.drawing = false;
        if !self.tool.is_shape() {
            return;
        }

        let width = self.brush_size as f32;
        match self.tool {
            Tool::Line => draw::draw_line(&mut self.surface, self.start, pos, width, self.color),
            Tool::Rectangle => draw::draw_rectangle(&mut self.surface, self.start, pos, width, self.color),
            Tool::Circle => draw::draw_circle(&mut self.surface, self.start, pos, width, self.color),
            _ => {}
        }
    }

    /// Pointer left the canvas: abandon the gesture without drawing.
    pub fn pointer_leave(&mut self) {
        self.drawing = false;
    }

    /// Repaint the whole surface with the background color.
    pub fn clear(&mut self) {
        self.surface.fill(self.background);
    }

    /// Replace the surface with a blank one of the new size.
    ///
    /// On error the current surface is kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.surface = RasterBuffer::filled(width, height, self.background)?;
        self.drawing = false;
        tracing::debug!(width, height, "canvas resized");
        Ok(())
    }

    /// PNG bytes of the surface flattened onto white.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        export::export_png(&self.surface)
    }
}
