//! Stroked shapes for the line, rectangle and circle tools.
//!
//! Shapes are defined by the drag gesture: the pointer-down position and
//! the pointer-up position.

use super::stroke::stroke_polyline;
use super::{cover, half_width, Composite, Point};
use crate::color::Rgba;
use crate::raster::RasterBuffer;

/// Straight line from `start` to `end` with round caps.
pub fn draw_line(buffer: &mut RasterBuffer, start: Point, end: Point, width: f32, color: Rgba) {
    stroke_polyline(buffer, &[start, end], false, width, color, Composite::SourceOver);
}

/// Rectangle outline with opposite corners `start` and `end`.
///
/// Corners may be given in any diagonal direction.
pub fn draw_rectangle(buffer: &mut RasterBuffer, start: Point, end: Point, width: f32, color: Rgba) {
    let corners = [
        start,
        Point::new(end.x, start.y),
        end,
        Point::new(start.x, end.y),
    ];
    stroke_polyline(buffer, &corners, true, width, color, Composite::SourceOver);
}

/// Circle outline centered at `center` passing through `edge`.
pub fn draw_circle(buffer: &mut RasterBuffer, center: Point, edge: Point, width: f32, color: Rgba) {
    let radius = center.distance(edge);
    let half = half_width(width);
    let reach = radius + half;

    let bounds = (center.x - reach, center.y - reach, center.x + reach, center.y + reach);
    cover(buffer, bounds, color, Composite::SourceOver, |_, _, p| {
        (p.distance(center) - radius).abs() <= half
    });
}
