//! Countdown frame rendering.
//!
//! [`FrameStyle`] resolves a [`CountdownConfig`] once per request: colors are
//! parsed, template traits extracted, fonts looked up and labels upper-cased.
//! [`FrameRenderer`] then redraws a single reused canvas for each remaining
//! time.

use ab_glyph::FontArc;
use image::{Rgba, RgbaImage};
use tracing::warn;

use super::canvas::Canvas;
use super::layout::{BoxRect, Layout, LABEL_HEIGHT};
use super::shape::{Geometry, Paint};
use super::text;
use crate::config::CountdownConfig;
use crate::countdown::{format_value, select_units, Remaining, Unit};
use crate::error::CountdownError;
use crate::fonts::{FontRegistry, FontWeight};
use crate::template::{Shape, TemplateTraits};

pub const DIGIT_FONT_SIZE: f32 = 32.0;
pub const INSIDE_LABEL_FONT_SIZE: f32 = 9.0;
pub const OUTSIDE_LABEL_FONT_SIZE: f32 = 11.0;
pub const BORDER_WIDTH: f32 = 2.0;
/// Digits move up by this much when the label shares the box.
pub const INSIDE_DIGIT_OFFSET: f32 = 8.0;
/// Inside labels sit this far below the box center.
pub const INSIDE_LABEL_OFFSET: f32 = 16.0;

/// One unit as it appears in a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBox<'a> {
    pub unit: Unit,
    pub label: &'a str,
    pub value: i64,
}

/// Everything about a countdown's look that stays fixed across frames.
pub struct FrameStyle {
    pub traits: TemplateTraits,
    pub background: Rgba<u8>,
    pub box_color: Rgba<u8>,
    pub text_color: Rgba<u8>,
    pub label_color: Rgba<u8>,
    /// Units in display order with their upper-cased labels.
    pub units: Vec<(Unit, String)>,
    digit_font: Option<FontArc>,
    label_font: Option<FontArc>,
}

impl FrameStyle {
    /// Resolve a config against the process-wide font registry.
    pub fn from_config(config: &CountdownConfig) -> Result<Self, CountdownError> {
        Self::with_fonts(config, crate::fonts::registry())
    }

    pub fn with_fonts(
        config: &CountdownConfig,
        fonts: &FontRegistry,
    ) -> Result<Self, CountdownError> {
        let traits = TemplateTraits::parse(config.template());

        let family = config.font();
        let label_weight = if traits.inside {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        };
        let digit_font = fonts.face(family, FontWeight::Bold).cloned();
        let label_font = fonts.face(family, label_weight).cloned();
        if digit_font.is_none() {
            warn!(family, "no font available, drawing boxes without text");
        }

        let units = select_units(config)
            .into_iter()
            .map(|unit| (unit, config.label(unit).to_uppercase()))
            .collect();

        Ok(Self {
            traits,
            background: config.background_color()?,
            box_color: config.box_color()?,
            text_color: config.text_color()?,
            label_color: config.label_color()?,
            units,
            digit_font,
            label_font,
        })
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.units.len())
    }

    /// Digit color: box color for digits-only and border templates, text
    /// color on filled boxes.
    pub fn digit_color(&self) -> Rgba<u8> {
        if self.traits.digits_only || self.traits.border {
            self.box_color
        } else {
            self.text_color
        }
    }

    /// Label color: outside labels always use the label color; inside labels
    /// follow the box's fill state.
    pub fn label_text_color(&self) -> Rgba<u8> {
        if !self.traits.inside {
            self.label_color
        } else if self.traits.border {
            self.box_color
        } else {
            self.text_color
        }
    }

    /// Unit boxes for a remaining time.
    pub fn unit_boxes(&self, remaining_ms: i64) -> Vec<UnitBox<'_>> {
        let remaining = Remaining::from_millis(remaining_ms);
        self.units
            .iter()
            .map(|(unit, label)| UnitBox {
                unit: *unit,
                label: label.as_str(),
                value: remaining.value(*unit),
            })
            .collect()
    }

    fn geometry(&self, rect: &BoxRect) -> Geometry {
        match self.traits.shape {
            Shape::Circle => {
                let (cx, cy) = rect.center();
                Geometry::Circle {
                    cx,
                    cy,
                    radius: rect.size / 2.0,
                }
            }
            shape => Geometry::RoundedRect {
                x: rect.x,
                y: rect.y,
                w: rect.size,
                h: rect.size,
                radius: shape.corner_radius(rect.size),
            },
        }
    }
}

/// Draws countdown frames into one reused canvas.
pub struct FrameRenderer {
    style: FrameStyle,
    layout: Layout,
    canvas: Canvas,
}

impl FrameRenderer {
    pub fn new(style: FrameStyle) -> Self {
        let layout = style.layout();
        let canvas = Canvas::new(layout.width, layout.height);
        Self {
            style,
            layout,
            canvas,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Clear the canvas and draw every unit box for `remaining_ms`.
    pub fn render(&mut self, remaining_ms: i64) -> &RgbaImage {
        self.canvas.clear(self.style.background);

        let boxes = self.style.unit_boxes(remaining_ms);
        for (rect, unit_box) in self.layout.boxes().zip(boxes.iter()) {
            draw_unit(&mut self.canvas, &self.style, &rect, unit_box);
        }

        self.canvas.image()
    }
}

fn draw_unit(canvas: &mut Canvas, style: &FrameStyle, rect: &BoxRect, unit_box: &UnitBox<'_>) {
    let traits = &style.traits;

    if traits.draws_box() {
        let paint = if traits.border {
            Paint::Stroke(BORDER_WIDTH)
        } else {
            Paint::Fill
        };
        style.geometry(rect).draw(canvas, paint, style.box_color);
    }

    let (cx, cy) = rect.center();

    if let Some(font) = &style.digit_font {
        let digit_y = if traits.inside {
            cy - INSIDE_DIGIT_OFFSET
        } else {
            cy
        };
        text::draw_centered(
            canvas,
            font,
            &format_value(unit_box.value),
            cx,
            digit_y,
            DIGIT_FONT_SIZE,
            style.digit_color(),
        );
    }

    if let Some(font) = &style.label_font {
        let (label_y, size) = if traits.inside {
            (cy + INSIDE_LABEL_OFFSET, INSIDE_LABEL_FONT_SIZE)
        } else {
            (rect.y + rect.size + LABEL_HEIGHT as f32, OUTSIDE_LABEL_FONT_SIZE)
        };
        text::draw_centered(
            canvas,
            font,
            unit_box.label,
            cx,
            label_y,
            size,
            style.label_text_color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const ORANGE: Rgba<u8> = Rgba([0xFE, 0x8A, 0x22, 255]);

    fn config(template: &str) -> CountdownConfig {
        CountdownConfig {
            template: Some(template.to_string()),
            ..Default::default()
        }
    }

    fn renderer(template: &str) -> FrameRenderer {
        let fonts = FontRegistry::bundled().unwrap();
        FrameRenderer::new(FrameStyle::with_fonts(&config(template), &fonts).unwrap())
    }

    /// A pixel just inside the top-left corner of the first box.
    fn corner_pixel(renderer: &FrameRenderer) -> Rgba<u8> {
        let rect = renderer.layout().box_rect(0);
        let image = renderer.canvas.image();
        *image.get_pixel(rect.x as u32 + 1, rect.y as u32 + 1)
    }

    /// A pixel inside the first box, away from digits and labels.
    fn interior_pixel(renderer: &FrameRenderer) -> Rgba<u8> {
        let rect = renderer.layout().box_rect(0);
        let image = renderer.canvas.image();
        *image.get_pixel(rect.x as u32 + 6, rect.y as u32 + 40)
    }

    #[test]
    fn test_unit_boxes_at_frame_zero() {
        let fonts = FontRegistry::bundled().unwrap();
        let style = FrameStyle::with_fonts(&CountdownConfig::default(), &fonts).unwrap();
        let boxes = style.unit_boxes(5_000);
        assert_eq!(
            boxes,
            vec![
                UnitBox { unit: Unit::Days, label: "DAYS", value: 0 },
                UnitBox { unit: Unit::Hours, label: "HOURS", value: 0 },
                UnitBox { unit: Unit::Minutes, label: "MINUTES", value: 0 },
                UnitBox { unit: Unit::Seconds, label: "SECONDS", value: 5 },
            ]
        );
    }

    #[test]
    fn test_labels_are_uppercased() {
        let fonts = FontRegistry::bundled().unwrap();
        let config = CountdownConfig {
            display_days: Some(false),
            display_hours: Some(false),
            label_minutes: Some("Minuten".to_string()),
            label_seconds: Some("sekunden".to_string()),
            ..Default::default()
        };
        let style = FrameStyle::with_fonts(&config, &fonts).unwrap();
        let labels: Vec<&str> = style.units.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["MINUTEN", "SEKUNDEN"]);
    }

    #[test]
    fn test_color_precedence() {
        let fonts = FontRegistry::bundled().unwrap();
        let base = CountdownConfig {
            box_color: Some("#112233".to_string()),
            text_color: Some("#445566".to_string()),
            label_color: Some("#778899".to_string()),
            ..Default::default()
        };
        let style_for = |template: &str| {
            let config = CountdownConfig {
                template: Some(template.to_string()),
                ..base.clone()
            };
            FrameStyle::with_fonts(&config, &fonts).unwrap()
        };

        let box_color = Rgba([0x11, 0x22, 0x33, 255]);
        let text_color = Rgba([0x44, 0x55, 0x66, 255]);
        let label_color = Rgba([0x77, 0x88, 0x99, 255]);

        let filled = style_for("square");
        assert_eq!(filled.digit_color(), text_color);
        assert_eq!(filled.label_text_color(), label_color);

        let digits = style_for("square-digits");
        assert_eq!(digits.digit_color(), box_color);

        let border = style_for("square-border");
        assert_eq!(border.digit_color(), box_color);
        assert_eq!(border.label_text_color(), label_color);

        let inside = style_for("rounded-md-inside");
        assert_eq!(inside.label_text_color(), text_color);

        let border_inside = style_for("rounded-md-border-inside");
        assert_eq!(border_inside.label_text_color(), box_color);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let fonts = FontRegistry::bundled().unwrap();
        let config = CountdownConfig {
            box_color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            FrameStyle::with_fonts(&config, &fonts),
            Err(CountdownError::Color(_))
        ));
    }

    #[test]
    fn test_square_fills_box() {
        let mut r = renderer("square");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), ORANGE);
        assert_eq!(interior_pixel(&r), ORANGE);
    }

    #[test]
    fn test_square_digits_paints_no_box() {
        let mut r = renderer("square-digits");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), WHITE);
        assert_eq!(interior_pixel(&r), WHITE);
    }

    #[test]
    fn test_square_digits_draws_digits_in_box_color() {
        let fonts = FontRegistry::bundled().unwrap();
        let config = CountdownConfig {
            template: Some("square-digits".to_string()),
            box_color: Some("#0A64C8".to_string()),
            ..Default::default()
        };
        let mut r = FrameRenderer::new(FrameStyle::with_fonts(&config, &fonts).unwrap());
        r.render(5_000);

        let rect = r.layout().box_rect(0);
        let image = r.canvas.image();
        let ink = |p: &Rgba<u8>| p.0[..3].iter().map(|&c| 255 - c as u32).sum::<u32>();
        let darkest = (rect.x as u32..(rect.x + rect.size) as u32)
            .flat_map(|x| (rect.y as u32..(rect.y + rect.size) as u32).map(move |y| (x, y)))
            .map(|(x, y)| *image.get_pixel(x, y))
            .max_by_key(ink)
            .unwrap();
        assert_eq!(darkest, Rgba([0x0A, 0x64, 0xC8, 255]));
    }

    #[test]
    fn test_digits_suffix_keeps_the_box() {
        let mut r = renderer("circle-digits");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), WHITE);
        let rect = r.layout().box_rect(0);
        let image = r.canvas.image();
        assert_eq!(*image.get_pixel(rect.x as u32 + 3, rect.y as u32 + 40), ORANGE);
    }

    #[test]
    fn test_inside_label_on_digits_template_is_visible() {
        let mut r = renderer("square-digits-inside");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), ORANGE);

        // White label text on the filled box.
        let rect = r.layout().box_rect(0);
        let (_, cy) = rect.center();
        let band = (cy + INSIDE_LABEL_OFFSET - 6.0) as u32..(cy + INSIDE_LABEL_OFFSET + 6.0) as u32;
        let image = r.canvas.image();
        let label_pixels = (rect.x as u32..(rect.x + rect.size) as u32)
            .flat_map(|x| band.clone().map(move |y| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) != ORANGE)
            .count();
        assert!(label_pixels > 0);
    }

    #[test]
    fn test_border_leaves_interior_background() {
        let mut r = renderer("square-border");
        r.render(5_000);
        let rect = r.layout().box_rect(0);
        let image = r.canvas.image();
        assert_eq!(*image.get_pixel(rect.x as u32, rect.y as u32 + 40), ORANGE);
        assert_eq!(interior_pixel(&r), WHITE);
    }

    #[test]
    fn test_circle_leaves_corners_background() {
        let mut r = renderer("circle");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), WHITE);
        let rect = r.layout().box_rect(0);
        let image = r.canvas.image();
        assert_eq!(*image.get_pixel(rect.x as u32 + 3, rect.y as u32 + 40), ORANGE);
    }

    #[test]
    fn test_rounded_corner_is_background() {
        let mut r = renderer("rounded-lg");
        r.render(5_000);
        assert_eq!(corner_pixel(&r), WHITE);
        assert_eq!(interior_pixel(&r), ORANGE);
    }

    #[test]
    fn test_render_reuses_canvas_and_changes_with_time() {
        let mut r = renderer("square");
        let first = r.render(65_000).clone();
        let second = r.render(64_000).clone();
        let again = r.render(65_000).clone();
        assert_eq!(first.dimensions(), (416, 156));
        assert_ne!(first, second);
        assert_eq!(first, again);
    }
}
