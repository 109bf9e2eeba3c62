//! WebAssembly exports for the paint application.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Pixel data
//! crosses the boundary as flat RGBA bytes in the same layout as a canvas
//! `ImageData` (`width * height * 4`, row-major), so results can be written
//! back with `putImageData` directly.

use wasm_bindgen::prelude::*;

use crate::color::Rgba;
use crate::draw::Point;
use crate::export;
use crate::fill::flood_fill_rgba;
use crate::raster::RasterBuffer;
use crate::tools::{client_to_canvas, CanvasRect, PaintCanvas, Tool};

// ============================================================================
// Stateless Functions
// ============================================================================

/// Paint bucket fill over canvas pixel data.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `x`, `y` - Seed pixel; outside the image leaves the data unchanged
/// * `color` - Fill color as `#RRGGBB` (opaque black if malformed)
///
/// # Returns
/// New flat array of RGBA bytes with the region filled
#[wasm_bindgen]
pub fn flood_fill_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    color: &str,
) -> Result<Vec<u8>, JsError> {
    Ok(flood_fill_rgba(data, width, height, x as i64, y as i64, color)?)
}

/// Parse `#RRGGBB` into `[r, g, b, a]` (opaque black if malformed).
#[wasm_bindgen]
pub fn parse_color_wasm(color: &str) -> Vec<u8> {
    Rgba::from_hex(color).to_array().to_vec()
}

/// Flatten RGBA data onto white and encode as PNG.
#[wasm_bindgen]
pub fn export_png_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let buffer = RasterBuffer::from_raw(width, height, data.to_vec())?;
    Ok(export::export_png(&buffer)?)
}

/// Download file name for an ISO timestamp (`new Date().toISOString()`).
#[wasm_bindgen]
pub fn export_file_name_wasm(iso_timestamp: &str) -> String {
    export::export_file_name(iso_timestamp)
}

// ============================================================================
// Paint Session
// ============================================================================

/// Stateful canvas driven by pointer events from the page.
#[wasm_bindgen]
pub struct PaintSession {
    canvas: PaintCanvas,
}

#[wasm_bindgen]
impl PaintSession {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<PaintSession, JsError> {
        Ok(PaintSession {
            canvas: PaintCanvas::new(width, height)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    /// One of `pen`, `bucket`, `line`, `rectangle`, `circle`, `eraser`.
    pub fn set_tool(&mut self, tool: &str) -> Result<(), JsError> {
        self.canvas.set_tool(tool.parse::<Tool>()?);
        Ok(())
    }

    pub fn tool(&self) -> String {
        self.canvas.tool().as_str().to_string()
    }

    pub fn set_color(&mut self, color: &str) {
        self.canvas.set_color_hex(color);
    }

    pub fn color(&self) -> String {
        self.canvas.color().to_hex()
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.canvas.set_brush_size(size);
    }

    pub fn brush_size(&self) -> u32 {
        self.canvas.brush_size()
    }

    /// Map client coordinates to canvas space using the element's bounding rect.
    pub fn to_canvas(&self, client_x: f32, client_y: f32, left: f32, top: f32, rect_width: f32, rect_height: f32) -> Vec<f32> {
        let rect = CanvasRect {
            left,
            top,
            width: rect_width,
            height: rect_height,
        };
        let p = client_to_canvas(client_x, client_y, rect, self.canvas.width(), self.canvas.height());
        vec![p.x, p.y]
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.canvas.pointer_down(Point::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.canvas.pointer_move(Point::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.canvas.pointer_up(Point::new(x, y));
    }

    pub fn pointer_leave(&mut self) {
        self.canvas.pointer_leave();
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Blank surface of the new size; an oversized request keeps the current one.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), JsError> {
        Ok(self.canvas.resize(width, height)?)
    }

    /// Copy of the surface as RGBA bytes for `putImageData`.
    pub fn pixels(&self) -> Vec<u8> {
        self.canvas.surface().as_raw().to_vec()
    }

    pub fn export_png(&self) -> Result<Vec<u8>, JsError> {
        Ok(self.canvas.export_png()?)
    }
}
