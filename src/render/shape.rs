//! Box shapes as signed distance fields.
//!
//! Distances are negative inside the outline, zero on it, positive outside.
//! Pixels are sampled at their centers, so an axis-aligned edge on an integer
//! coordinate produces crisp pixels and curves get one pixel of anti-aliasing.

use image::Rgba;

use super::canvas::Canvas;

/// Outline of a unit box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { cx: f32, cy: f32, radius: f32 },
    /// Rectangle with quarter-circle corners. A radius of 0 is a sharp box.
    RoundedRect { x: f32, y: f32, w: f32, h: f32, radius: f32 },
}

/// How a geometry is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill,
    /// Outline only, centered on the edge, with the given line width.
    Stroke(f32),
}

/// Signed distance from (px, py) to a circle.
#[inline]
pub fn sdf_circle(px: f32, py: f32, cx: f32, cy: f32, radius: f32) -> f32 {
    let dx = px - cx;
    let dy = py - cy;
    (dx * dx + dy * dy).sqrt() - radius
}

/// Signed distance from (px, py) to a rounded rectangle.
///
/// The radius is clamped to half the smaller side.
pub fn sdf_rounded_rect(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32, radius: f32) -> f32 {
    let hx = w / 2.0;
    let hy = h / 2.0;
    let r = radius.min(hx).min(hy).max(0.0);

    let qx = (px - (x + hx)).abs() - hx + r;
    let qy = (py - (y + hy)).abs() - hy + r;

    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}

/// Coverage of a filled shape at signed distance `d`.
#[inline]
pub fn fill_coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

/// Coverage of a stroke of `width` centered on the outline.
#[inline]
pub fn stroke_coverage(d: f32, width: f32) -> f32 {
    (width / 2.0 + 0.5 - d.abs()).clamp(0.0, 1.0)
}

impl Geometry {
    pub fn distance(&self, px: f32, py: f32) -> f32 {
        match *self {
            Geometry::Circle { cx, cy, radius } => sdf_circle(px, py, cx, cy, radius),
            Geometry::RoundedRect { x, y, w, h, radius } => {
                sdf_rounded_rect(px, py, x, y, w, h, radius)
            }
        }
    }

    /// Bounding box as (min_x, min_y, max_x, max_y).
    fn bounds(&self) -> (f32, f32, f32, f32) {
        match *self {
            Geometry::Circle { cx, cy, radius } => {
                (cx - radius, cy - radius, cx + radius, cy + radius)
            }
            Geometry::RoundedRect { x, y, w, h, .. } => (x, y, x + w, y + h),
        }
    }

    /// Paint the geometry onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas, paint: Paint, color: Rgba<u8>) {
        let margin = match paint {
            Paint::Fill => 1.0,
            Paint::Stroke(width) => width / 2.0 + 1.0,
        };
        let (x0, y0, x1, y1) = self.bounds();
        let min_x = (x0 - margin).floor() as i32;
        let min_y = (y0 - margin).floor() as i32;
        let max_x = (x1 + margin).ceil() as i32;
        let max_y = (y1 + margin).ceil() as i32;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let d = self.distance(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = match paint {
                    Paint::Fill => fill_coverage(d),
                    Paint::Stroke(width) => stroke_coverage(d, width),
                };
                if coverage > 0.0 {
                    canvas.blend_pixel(px, py, color, coverage);
                }
            }
        }
    }
}
