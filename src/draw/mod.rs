//! Brush and shape rasterization onto a [`RasterBuffer`].
//!
//! ## Coverage Model
//!
//! Every primitive is rasterized as a coverage test on pixel centers
//! `(x + 0.5, y + 0.5)`: a pixel is painted when its center lies inside the
//! stroked geometry. There is no anti-aliasing. Each primitive visits a
//! pixel at most once, so translucent colors blend exactly once per call.
//!
//! ## Compositing
//!
//! - **SourceOver** - pen and shapes, straight-alpha "over" blend
//! - **DestinationOut** - eraser, removes coverage proportional to brush alpha

pub mod shapes;
pub mod stroke;

pub use shapes::{draw_circle, draw_line, draw_rectangle};
pub use stroke::{stamp_disc, stroke_polyline, stroke_segment};

use crate::color::Rgba;
use crate::raster::RasterBuffer;

/// A position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Integer pixel containing this point.
    #[inline]
    pub fn pixel(self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

/// How brush color combines with existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composite {
    #[default]
    SourceOver,
    DestinationOut,
}

impl Composite {
    /// Combine source `src` onto destination `dst`.
    pub fn apply(self, dst: Rgba, src: Rgba) -> Rgba {
        match self {
            Composite::SourceOver => source_over(dst, src),
            Composite::DestinationOut => destination_out(dst, src),
        }
    }
}

fn source_over(dst: Rgba, src: Rgba) -> Rgba {
    if src.a == 255 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }

    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let blend = |s: u8, d: u8| -> u8 {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba::new(
        blend(src.r, dst.r),
        blend(src.g, dst.g),
        blend(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

fn destination_out(dst: Rgba, src: Rgba) -> Rgba {
    let remaining = dst.a as f32 * (1.0 - src.a as f32 / 255.0);
    let a = remaining.round().clamp(0.0, 255.0) as u8;
    if a == 0 {
        Rgba::TRANSPARENT
    } else {
        Rgba::new(dst.r, dst.g, dst.b, a)
    }
}

/// Half of a stroke width, with the 1px minimum applied.
#[inline]
pub(crate) fn half_width(width: f32) -> f32 {
    // f32::max ignores NaN
    width.max(1.0) / 2.0
}

/// Composite `color` onto every pixel inside the box whose center passes `covered`.
///
/// The box is given in pixel coordinates (inclusive) and clipped to the buffer.
pub(crate) fn cover<F>(
    buffer: &mut RasterBuffer,
    (x0, y0, x1, y1): (f32, f32, f32, f32),
    color: Rgba,
    mode: Composite,
    covered: F,
) where
    F: Fn(i64, i64, Point) -> bool,
{
    let max_x = buffer.width() as i64 - 1;
    let max_y = buffer.height() as i64 - 1;
    if max_x < 0 || max_y < 0 {
        return;
    }

    let min_x = (x0.floor() as i64).clamp(0, max_x);
    let min_y = (y0.floor() as i64).clamp(0, max_y);
    let end_x = (x1.ceil() as i64).clamp(0, max_x);
    let end_y = (y1.ceil() as i64).clamp(0, max_y);

    for y in min_y..=end_y {
        for x in min_x..=end_x {
            let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if !covered(x, y, center) {
                continue;
            }
            if let Some(idx) = buffer.pixel_index(x, y) {
                let blended = mode.apply(buffer.pixel_at(idx), color);
                buffer.set_pixel_at(idx, blended);
            }
        }
    }
}
