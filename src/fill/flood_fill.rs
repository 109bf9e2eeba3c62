//! Paint bucket flood fill.
//!
//! Replaces the 4-connected region of pixels that exactly match the seed
//! pixel's color. The traversal uses an explicit stack and a dense visited
//! bitmap, so region size is bounded by memory rather than call depth.

use crate::color::Rgba;
use crate::error::Result;
use crate::raster::RasterBuffer;

/// Flood fill result with metadata.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// Filled copy of the input
    pub buffer: RasterBuffer,
    /// Bounds of the repainted region
    pub bounds: Option<(usize, usize, usize, usize)>, // (x, y, width, height)
    /// Number of repainted pixels
    pub pixel_count: usize,
}

/// Fill the region connected to `(seed_x, seed_y)` with `fill`.
///
/// Returns a new buffer. A seed outside the buffer, or a seed whose color
/// already equals `fill`, yields an unchanged copy.
pub fn flood_fill(buffer: &RasterBuffer, seed_x: i64, seed_y: i64, fill: Rgba) -> RasterBuffer {
    flood_fill_detailed(buffer, seed_x, seed_y, fill).buffer
}

/// Like [`flood_fill`], taking the color as `#RRGGBB` (opaque black if malformed).
pub fn flood_fill_hex(buffer: &RasterBuffer, seed_x: i64, seed_y: i64, fill_hex: &str) -> RasterBuffer {
    flood_fill(buffer, seed_x, seed_y, Rgba::from_hex(fill_hex))
}

/// Flood fill over flat RGBA bytes.
///
/// # Arguments
/// * `data` - RGBA image data (4 bytes per pixel, row-major)
/// * `width` - Image width
/// * `height` - Image height
/// * `seed_x` - Starting X coordinate
/// * `seed_y` - Starting Y coordinate
/// * `fill_hex` - Fill color as `#RRGGBB` or `RRGGBB`
///
/// # Returns
/// Filled copy of `data`, or an error if `data` does not hold `width * height` pixels
pub fn flood_fill_rgba(
    data: &[u8],
    width: usize,
    height: usize,
    seed_x: i64,
    seed_y: i64,
    fill_hex: &str,
) -> Result<Vec<u8>> {
    let buffer = RasterBuffer::from_raw(width, height, data.to_vec())?;
    Ok(flood_fill_hex(&buffer, seed_x, seed_y, fill_hex).into_raw())
}

/// Perform flood fill with detailed results.
#[tracing::instrument(level = "debug", skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn flood_fill_detailed(buffer: &RasterBuffer, seed_x: i64, seed_y: i64, fill: Rgba) -> FillOutcome {
    let mut output = buffer.clone();

    // None when the seed lies outside; the traversal then discards the seed
    let target = output.pixel(seed_x, seed_y);
    if target == Some(fill) {
        tracing::debug!("seed already has fill color");
        return FillOutcome {
            buffer: output,
            bounds: None,
            pixel_count: 0,
        };
    }

    let width = output.width();
    let mut visited = vec![false; width * output.height()];
    let mut stack = vec![(seed_x, seed_y)];

    let mut pixel_count = 0;
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0;
    let mut max_y = 0;

    while let Some((x, y)) = stack.pop() {
        let Some(idx) = output.pixel_index(x, y) else {
            continue;
        };
        if visited[idx] {
            continue;
        }
        if Some(output.pixel_at(idx)) != target {
            continue;
        }

        visited[idx] = true;
        output.set_pixel_at(idx, fill);

        pixel_count += 1;
        let (px, py) = (idx % width, idx / width);
        min_x = min_x.min(px);
        min_y = min_y.min(py);
        max_x = max_x.max(px);
        max_y = max_y.max(py);

        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    let bounds = if pixel_count > 0 {
        Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    } else {
        None
    };
    tracing::debug!(pixel_count, ?bounds, "flood fill complete");

    FillOutcome {
        buffer: output,
        bounds,
        pixel_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    /// 4x4 white image with a single black pixel at (2, 2).
    fn white_with_black_center() -> RasterBuffer {
        let mut image = RasterBuffer::filled(4, 4, Rgba::WHITE).unwrap();
        image.put_pixel(2, 2, Rgba::BLACK);
        image
    }

    fn count(buffer: &RasterBuffer, color: Rgba) -> usize {
        buffer.as_raw().chunks(4).filter(|px| *px == color.to_array()).count()
    }

    #[test]
    fn test_fill_around_obstacle() {
        let image = white_with_black_center();
        let result = flood_fill(&image, 0, 0, RED);

        assert_eq!(count(&result, RED), 15);
        assert_eq!(result.pixel(2, 2), Some(Rgba::BLACK));
        // input untouched
        assert_eq!(image, white_with_black_center());
    }

    #[test]
    fn test_fill_single_pixel_region() {
        let image = white_with_black_center();
        let result = flood_fill(&image, 2, 2, RED);

        assert_eq!(result.pixel(2, 2), Some(RED));
        assert_eq!(count(&result, Rgba::WHITE), 15);
    }

    #[test]
    fn test_full_coverage() {
        let image = RasterBuffer::filled(7, 5, BLUE).unwrap();
        for (sx, sy) in [(0, 0), (6, 4), (3, 2), (6, 0)] {
            let result = flood_fill(&image, sx, sy, RED);
            assert_eq!(count(&result, RED), 35);
        }
    }

    #[test]
    fn test_same_color_is_noop() {
        // Two disconnected red regions separated by a blue column
        let mut image = RasterBuffer::filled(5, 3, RED).unwrap();
        for y in 0..3 {
            image.put_pixel(2, y, BLUE);
        }

        let outcome = flood_fill_detailed(&image, 0, 0, RED);
        assert_eq!(outcome.buffer, image);
        assert_eq!(outcome.pixel_count, 0);
        assert_eq!(outcome.bounds, None);
    }

    #[test]
    fn test_idempotent() {
        let image = white_with_black_center();
        let once = flood_fill(&image, 0, 0, RED);
        let twice = flood_fill(&once, 0, 0, RED);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_containment() {
        // 5x3: left region white, blue wall at x=2, right region white
        let mut image = RasterBuffer::filled(5, 3, Rgba::WHITE).unwrap();
        for y in 0..3 {
            image.put_pixel(2, y, BLUE);
        }

        let outcome = flood_fill_detailed(&image, 0, 1, RED);
        assert_eq!(outcome.pixel_count, 6);
        assert_eq!(outcome.bounds, Some((0, 0, 2, 3)));
        for y in 0..3 {
            assert_eq!(outcome.buffer.pixel(3, y), Some(Rgba::WHITE));
            assert_eq!(outcome.buffer.pixel(4, y), Some(Rgba::WHITE));
            assert_eq!(outcome.buffer.pixel(2, y), Some(BLUE));
        }
    }

    #[test]
    fn test_no_diagonal_spread() {
        // Checkerboard: every white pixel is its own 4-connected region
        let mut image = RasterBuffer::filled(3, 3, Rgba::BLACK).unwrap();
        for y in 0..3i64 {
            for x in 0..3i64 {
                if (x + y) % 2 == 0 {
                    image.put_pixel(x, y, Rgba::WHITE);
                }
            }
        }

        let outcome = flood_fill_detailed(&image, 1, 1, RED);
        assert_eq!(outcome.pixel_count, 1);
        assert_eq!(outcome.bounds, Some((1, 1, 1, 1)));
    }

    #[test]
    fn test_out_of_bounds_seed() {
        let image = white_with_black_center();
        for (sx, sy) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i64::MIN, i64::MAX)] {
            let outcome = flood_fill_detailed(&image, sx, sy, RED);
            assert_eq!(outcome.buffer, image);
            assert_eq!(outcome.pixel_count, 0);
        }
    }

    #[test]
    fn test_corner_and_edge_seeds() {
        let image = RasterBuffer::filled(3, 2, Rgba::WHITE).unwrap();
        for (sx, sy) in [(0, 0), (2, 0), (0, 1), (2, 1), (1, 0)] {
            let result = flood_fill(&image, sx, sy, BLUE);
            assert_eq!(result.as_raw().len(), image.as_raw().len());
            assert_eq!(count(&result, BLUE), 6);
        }
    }

    #[test]
    fn test_alpha_is_part_of_match() {
        let mut image = RasterBuffer::filled(3, 1, Rgba::new(255, 255, 255, 255)).unwrap();
        image.put_pixel(1, 0, Rgba::new(255, 255, 255, 128));

        let outcome = flood_fill_detailed(&image, 0, 0, RED);
        assert_eq!(outcome.pixel_count, 1);
        assert_eq!(outcome.buffer.pixel(2, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_hex_entry_points() {
        let image = white_with_black_center();
        let result = flood_fill_hex(&image, 0, 0, "#ff0000");
        assert_eq!(result, flood_fill(&image, 0, 0, RED));

        // malformed color fills with opaque black, merging with the obstacle color
        let result = flood_fill_hex(&image, 0, 0, "not-a-color");
        assert_eq!(count(&result, Rgba::BLACK), 16);

        let raw = flood_fill_rgba(image.as_raw(), 4, 4, 2, 2, "FF0000").unwrap();
        assert_eq!(&raw[(2 * 4 + 2) * 4..(2 * 4 + 2) * 4 + 4], &[255, 0, 0, 255]);
        assert!(flood_fill_rgba(image.as_raw(), 5, 4, 0, 0, "#ff0000").is_err());
    }

    #[test]
    fn test_flat_entry_rejects_wrapping_dimensions() {
        let result = flood_fill_rgba(&[], usize::MAX / 4 + 1, 1, 0, 0, "#ff0000");
        assert!(matches!(result, Err(PaintError::TooLarge { .. })));
    }

    #[test]
    fn test_large_region_no_recursion_limit() {
        let image = RasterBuffer::filled(512, 512, Rgba::WHITE).unwrap();
        let outcome = flood_fill_detailed(&image, 256, 256, RED);
        assert_eq!(outcome.pixel_count, 512 * 512);
        assert_eq!(outcome.bounds, Some((0, 0, 512, 512)));
    }

    #[test]
    fn test_concurrent_fills_are_independent() {
        use rayon::prelude::*;

        let image = white_with_black_center();
        let colors = [RED, BLUE, Rgba::opaque(0, 255, 0), Rgba::opaque(9, 9, 9)];
        let results: Vec<RasterBuffer> = colors.par_iter().map(|&c| flood_fill(&image, 0, 0, c)).collect();

        for (result, &color) in results.iter().zip(colors.iter()) {
            assert_eq!(count(result, color), 15);
        }
        assert_eq!(image, white_with_black_center());
    }
}
