//! TTF text drawing with ab_glyph.
//!
//! Text is laid out on a single line, horizontally centered on `cx`, with
//! its em box vertically centered on `cy` (a "middle" baseline).
//!
//! Sizes are CSS-style font sizes: the em square is `font_size` pixels tall.

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::Rgba;

use super::canvas::Canvas;

/// Convert a font size (em height in pixels) to ab_glyph's scale, which
/// measures ascent to descent instead.
pub fn em_scale(font: &FontArc, font_size: f32) -> PxScale {
    let height = font.height_unscaled();
    let units_per_em = font.units_per_em().unwrap_or(height);
    PxScale::from(font_size * height / units_per_em)
}

/// Advance width of `text` at `font_size`, kerning included.
pub fn measure(font: &FontArc, text: &str, font_size: f32) -> f32 {
    let scale = em_scale(font, font_size);
    layout(font, text, scale)
        .last()
        .map(|&(id, x)| x + font.as_scaled(scale).h_advance(id))
        .unwrap_or(0.0)
}

/// Glyph ids with their pen x offsets from the start of the line.
fn layout(font: &FontArc, text: &str, scale: PxScale) -> Vec<(GlyphId, f32)> {
    let scaled = font.as_scaled(scale);
    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret_x = 0.0f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret_x += scaled.kern(prev, id);
        }
        glyphs.push((id, caret_x));
        caret_x += scaled.h_advance(id);
        previous = Some(id);
    }

    glyphs
}

/// Draw `text` centered on (cx, cy).
pub fn draw_centered(
    canvas: &mut Canvas,
    font: &FontArc,
    text: &str,
    cx: f32,
    cy: f32,
    font_size: f32,
    color: Rgba<u8>,
) {
    let scale = em_scale(font, font_size);
    let scaled = font.as_scaled(scale);
    let width = measure(font, text, font_size);
    let start_x = cx - width / 2.0;
    // descent is negative
    let baseline_y = cy + (scaled.ascent() + scaled.descent()) / 2.0;

    for (id, x) in layout(font, text, scale) {
        let glyph = id.with_scale_and_position(scale, point(start_x + x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;
                canvas.blend_pixel(x, y, color, coverage);
            });
        }
    }
}
