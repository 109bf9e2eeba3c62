//! PNG export of the paint surface.
//!
//! Erased areas are transparent on the surface, so export first flattens
//! the image onto an opaque white background, then encodes lossless PNG.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use rayon::prelude::*;

use crate::color::Rgba;
use crate::draw::Composite;
use crate::error::{PaintError, Result};
use crate::raster::{RasterBuffer, CHANNELS};

/// Composite every pixel over an opaque `background`.
pub fn flatten_onto(buffer: &RasterBuffer, background: Rgba) -> RasterBuffer {
    let mut output = buffer.clone();
    output.rows_mut().for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let over = Composite::SourceOver.apply(background, Rgba::from_slice(px));
            px.copy_from_slice(&over.to_array());
        }
    });
    output
}

/// Encode the buffer as an RGBA PNG.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>> {
    let (width, height) = (buffer.width(), buffer.height());
    let expected = width * height * CHANNELS;
    let mismatch = || PaintError::DimensionMismatch {
        width,
        height,
        expected,
        actual: buffer.as_raw().len(),
    };

    let w = u32::try_from(width).map_err(|_| mismatch())?;
    let h = u32::try_from(height).map_err(|_| mismatch())?;
    let img = RgbaImage::from_raw(w, h, buffer.as_raw().to_vec()).ok_or_else(mismatch)?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    tracing::debug!(width, height, bytes = out.get_ref().len(), "encoded png");
    Ok(out.into_inner())
}

/// Flatten onto white and encode as PNG, matching what the download button produces.
pub fn export_png(buffer: &RasterBuffer) -> Result<Vec<u8>> {
    encode_png(&flatten_onto(buffer, Rgba::WHITE))
}

/// Download file name for an ISO-8601 timestamp, e.g. `elef-paint-2024-05-01T12-30-00.png`.
pub fn export_file_name(iso_timestamp: &str) -> String {
    let stamp: String = iso_timestamp.chars().take(19).collect();
    format!("elef-paint-{}.png", stamp.replace(':', "-"))
}
