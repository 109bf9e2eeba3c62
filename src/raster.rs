//! Owned RGBA raster surface.
//!
//! Pixels are stored row-major as flat bytes, 4 channels per pixel, so the
//! buffer can be handed straight to a canvas `ImageData` or a numpy array
//! of shape `(height, width, 4)`. Pixel `(x, y)` starts at `(y * W + x) * 4`.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::color::Rgba;
use crate::error::{PaintError, Result};

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Byte length of a `width`×`height` RGBA buffer, if it can be allocated.
fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(PaintError::TooLarge { width, height })
}

/// A W×H RGBA8 image whose byte length always matches its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        buffer.fill(color);
        Ok(buffer)
    }

    /// Wrap raw RGBA bytes.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(PaintError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Take ownership of a `(height, width, 4)` array.
    pub fn from_array(array: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(PaintError::ChannelCount(channels));
        }
        let array = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        let (data, _) = array.into_raw_vec_and_offset();
        Self::from_raw(width, height, data)
    }

    /// Copy a `(height, width, 4)` view.
    pub fn from_view(view: ArrayView3<u8>) -> Result<Self> {
        Self::from_array(view.to_owned())
    }

    /// Borrow the pixels as a `(height, width, 4)` view.
    pub fn view(&self) -> Result<ArrayView3<'_, u8>> {
        Ok(ArrayView3::from_shape((self.height, self.width, CHANNELS), &self.data)?)
    }

    pub fn to_array(&self) -> Result<Array3<u8>> {
        Ok(Array3::from_shape_vec((self.height, self.width, CHANNELS), self.data.clone())?)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` addresses a pixel of this buffer.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Pixel index (not byte offset) for in-bounds coordinates.
    #[inline]
    pub fn pixel_index(&self, x: i64, y: i64) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        self.pixel_index(x, y).map(|idx| self.pixel_at(idx))
    }

    /// Color of the pixel at a pixel index from [`Self::pixel_index`].
    #[inline]
    pub fn pixel_at(&self, idx: usize) -> Rgba {
        let offset = idx * CHANNELS;
        Rgba::from_slice(&self.data[offset..offset + CHANNELS])
    }

    #[inline]
    pub fn set_pixel_at(&mut self, idx: usize, color: Rgba) {
        let offset = idx * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Write a pixel; coordinates outside the buffer are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.set_pixel_at(idx, color);
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_array();
        self.rows_mut().for_each(|row| {
            for chunk in row.chunks_exact_mut(CHANNELS) {
                chunk.copy_from_slice(&px);
            }
        });
    }

    /// Mutable rows of `width * 4` bytes, for parallel per-row passes.
    pub(crate) fn rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, u8> {
        let stride = (self.width * CHANNELS).max(1);
        self.data.par_chunks_mut(stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(RasterBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
        let err = RasterBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, PaintError::DimensionMismatch { expected: 16, actual: 15, .. }));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        // (usize::MAX / 4 + 1) * 4 wraps to 0 bytes without checked arithmetic
        let err = RasterBuffer::from_raw(usize::MAX / 4 + 1, 1, Vec::new()).unwrap_err();
        assert!(matches!(err, PaintError::TooLarge { height: 1, .. }));
        assert!(RasterBuffer::from_raw(usize::MAX, usize::MAX, Vec::new()).is_err());
        assert!(matches!(RasterBuffer::new(usize::MAX, 2), Err(PaintError::TooLarge { .. })));
        assert!(RasterBuffer::filled(usize::MAX / 4 + 1, 1, Rgba::WHITE).is_err());
    }

    #[test]
    fn test_pixel_addressing_row_major() {
        let mut data = vec![0u8; 3 * 2 * 4];
        // pixel (2, 1) -> offset (1 * 3 + 2) * 4 = 20
        data[20..24].copy_from_slice(&[9, 8, 7, 6]);
        let buffer = RasterBuffer::from_raw(3, 2, data).unwrap();
        assert_eq!(buffer.pixel(2, 1), Some(Rgba::new(9, 8, 7, 6)));
        assert_eq!(buffer.pixel_index(2, 1), Some(5));
    }

    #[test]
    fn test_out_of_bounds() {
        let buffer = RasterBuffer::new(3, 2).unwrap();
        assert_eq!(buffer.pixel(-1, 0), None);
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
        assert!(!buffer.contains(i64::MIN, i64::MAX));
    }

    #[test]
    fn test_put_pixel_ignores_outside() {
        let mut buffer = RasterBuffer::new(2, 2).unwrap();
        buffer.put_pixel(-1, 0, Rgba::WHITE);
        buffer.put_pixel(0, 5, Rgba::WHITE);
        assert!(buffer.as_raw().iter().all(|&v| v == 0));
        buffer.put_pixel(1, 1, Rgba::WHITE);
        assert_eq!(buffer.pixel(1, 1), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill() {
        let buffer = RasterBuffer::filled(4, 3, Rgba::opaque(1, 2, 3)).unwrap();
        assert!(buffer.as_raw().chunks(4).all(|px| px == [1, 2, 3, 255]));
    }

    #[test]
    fn test_array_interop() {
        let mut array = Array3::<u8>::zeros((2, 3, 4));
        array[[1, 2, 0]] = 200;
        array[[1, 2, 3]] = 255;
        let buffer = RasterBuffer::from_array(array.clone()).unwrap();
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixel(2, 1), Some(Rgba::new(200, 0, 0, 255)));
        assert_eq!(buffer.to_array().unwrap(), array);
        assert_eq!(buffer.view().unwrap()[[1, 2, 0]], 200);
    }

    #[test]
    fn test_array_non_standard_layout() {
        let mut array = Array3::<u8>::zeros((3, 2, 4));
        array[[2, 1, 1]] = 77;
        // swap to (2, 3, 4) view that is not contiguous
        let swapped = array.view().permuted_axes([1, 0, 2]);
        let buffer = RasterBuffer::from_view(swapped).unwrap();
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.pixel(2, 1).map(|c| c.g), Some(77));
    }

    #[test]
    fn test_array_rejects_rgb() {
        let array = Array3::<u8>::zeros((2, 2, 3));
        assert!(matches!(RasterBuffer::from_array(array), Err(PaintError::ChannelCount(3))));
    }

    #[test]
    fn test_zero_sized() {
        let mut buffer = RasterBuffer::new(0, 5).unwrap();
        buffer.fill(Rgba::WHITE);
        assert!(buffer.as_raw().is_empty());
        assert_eq!(buffer.pixel(0, 0), None);
    }
}
