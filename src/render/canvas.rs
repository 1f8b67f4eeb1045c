//! Reusable RGBA drawing surface.
//!
//! One canvas is allocated per request and cleared before every frame.
//! Shapes and glyphs paint through [`Canvas::blend_pixel`] with a coverage
//! value, composited source-over.

use image::{Rgba, RgbaImage};

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Overwrite every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Composite `color` over the pixel at (x, y), scaled by `coverage`.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 || color[3] == 0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = over(color, *dst, coverage);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Source-over compositing with straight (non-premultiplied) alpha.
fn over(src: Rgba<u8>, dst: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0 * coverage;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let c = (src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const ORANGE: Rgba<u8> = Rgba([0xFE, 0x8A, 0x22, 255]);

    #[test]
    fn test_clear_overwrites_everything() {
        let mut canvas = Canvas::new(4, 3);
        canvas.blend_pixel(1, 1, ORANGE, 1.0);
        canvas.clear(WHITE);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_full_coverage_replaces_opaque_pixel() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(WHITE);
        canvas.blend_pixel(0, 0, ORANGE, 1.0);
        assert_eq!(canvas.pixel(0, 0), ORANGE);
        assert_eq!(canvas.pixel(1, 1), WHITE);
    }

    #[test]
    fn test_partial_coverage_mixes() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(WHITE);
        canvas.blend_pixel(0, 0, Rgba([0, 0, 0, 255]), 0.5);
        let p = canvas.pixel(0, 0);
        assert!(p[0] > 120 && p[0] < 135, "got {:?}", p);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(WHITE);
        canvas.blend_pixel(-1, 0, ORANGE, 1.0);
        canvas.blend_pixel(0, 2, ORANGE, 1.0);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_zero_coverage_and_transparent_color_are_noops() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(WHITE);
        canvas.blend_pixel(0, 0, ORANGE, 0.0);
        canvas.blend_pixel(0, 0, Rgba([0, 0, 0, 0]), 1.0);
        assert_eq!(canvas.pixel(0, 0), WHITE);
    }
}
