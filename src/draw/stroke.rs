//! Round-capped brush strokes.
//!
//! A stroke of width `w` covers every pixel whose center is within `w / 2`
//! of the path (a capsule per segment), which gives round caps and joins.
//! The pixel containing each path vertex is always covered so a 1px brush
//! never drops its endpoints.

use super::{cover, half_width, Composite, Point};
use crate::color::Rgba;
use crate::raster::RasterBuffer;

/// Distance from `p` to the segment `a`-`b`.
fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Bounding box of `points` grown by `pad`.
fn bounds(points: &[Point], pad: f32) -> (f32, f32, f32, f32) {
    points.iter().fold(
        (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        |(x0, y0, x1, y1), p| (x0.min(p.x - pad), y0.min(p.y - pad), x1.max(p.x + pad), y1.max(p.y + pad)),
    )
}

/// Stroke a polyline through `points`, optionally closing it.
pub fn stroke_polyline(
    buffer: &mut RasterBuffer,
    points: &[Point],
    closed: bool,
    width: f32,
    color: Rgba,
    mode: Composite,
) {
    if points.is_empty() {
        return;
    }
    let radius = half_width(width);

    let mut segments: Vec<(Point, Point)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 2 {
        segments.push((points[points.len() - 1], points[0]));
    }
    if segments.is_empty() {
        segments.push((points[0], points[0]));
    }

    let vertices: Vec<(i64, i64)> = points.iter().map(|p| p.pixel()).collect();

    cover(buffer, bounds(points, radius), color, mode, |x, y, center| {
        vertices.contains(&(x, y))
            || segments
                .iter()
                .any(|&(a, b)| distance_to_segment(center, a, b) <= radius)
    });
}

/// Stroke a single segment with round caps.
pub fn stroke_segment(
    buffer: &mut RasterBuffer,
    from: Point,
    to: Point,
    width: f32,
    color: Rgba,
    mode: Composite,
) {
    stroke_polyline(buffer, &[from, to], false, width, color, mode);
}

/// Paint a filled disc of diameter `width` centered at `center`.
pub fn stamp_disc(buffer: &mut RasterBuffer, center: Point, width: f32, color: Rgba, mode: Composite) {
    stroke_polyline(buffer, &[center], false, width, color, mode);
}
