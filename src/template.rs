//! # Template Traits
//!
//! A template string such as `"rounded-md-border-inside"` is a base shape
//! plus optional `-border` / `-inside` modifiers, detected by substring.
//! `"square-digits"` is a standalone template with no box. The string is
//! parsed once per request into [`TemplateTraits`] so the renderer never
//! branches on strings.

/// Base shape of a unit box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    RoundedSm,
    RoundedMd,
    RoundedLg,
    Circle,
}

impl Shape {
    /// Corner radius in pixels for rectangular shapes.
    ///
    /// Circles report half the box size, which turns a rounded rectangle
    /// into a full circle after clamping.
    pub fn corner_radius(self, box_size: f32) -> f32 {
        match self {
            Shape::Square => 0.0,
            Shape::RoundedSm => 4.0,
            Shape::RoundedMd => 8.0,
            Shape::RoundedLg => 16.0,
            Shape::Circle => box_size / 2.0,
        }
    }
}

/// Explicit traits of a countdown template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateTraits {
    pub shape: Shape,
    /// Stroke the box outline instead of filling it.
    pub border: bool,
    /// Draw the label inside the box, under the digits.
    pub inside: bool,
    /// No box at all; digits take the box color.
    pub digits_only: bool,
}

impl Default for TemplateTraits {
    fn default() -> Self {
        Self::parse("square")
    }
}

impl TemplateTraits {
    /// Parse a template token. Unknown tokens yield a plain square.
    pub fn parse(template: &str) -> Self {
        let t = template.trim().to_ascii_lowercase();

        let shape = if t.contains("circle") {
            Shape::Circle
        } else if t.contains("rounded-lg") {
            Shape::RoundedLg
        } else if t.contains("rounded-md") {
            Shape::RoundedMd
        } else if t.contains("rounded-sm") {
            Shape::RoundedSm
        } else {
            Shape::Square
        };

        Self {
            shape,
            border: t.contains("border"),
            inside: t.contains("inside"),
            digits_only: t == "square-digits",
        }
    }

    /// Whether a box shape is painted at all.
    pub fn draws_box(&self) -> bool {
        !self.digits_only
    }
}
