//! # Countdown Configuration
//!
//! The `config` object of a `/generate-gif` request. Every field is optional;
//! absent, `null` and empty-string values all resolve to the documented default.

use image::Rgba;
use serde::Deserialize;

use crate::countdown::Unit;
use crate::error::CountdownError;

pub const DEFAULT_TEMPLATE: &str = "square";
pub const DEFAULT_FONT: &str = "Roboto";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BOX_COLOR: &str = "#FE8A22";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_LABEL_COLOR: &str = "#FE8A22";

/// Visual configuration of a countdown GIF.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub display_days: Option<bool>,
    pub display_hours: Option<bool>,
    pub label_days: Option<String>,
    pub label_hours: Option<String>,
    pub label_minutes: Option<String>,
    pub label_seconds: Option<String>,
    pub template: Option<String>,
    pub font: Option<String>,
    pub background_color: Option<String>,
    pub box_color: Option<String>,
    pub text_color: Option<String>,
    pub label_color: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

impl CountdownConfig {
    pub fn display_days(&self) -> bool {
        self.display_days.unwrap_or(true)
    }

    pub fn display_hours(&self) -> bool {
        self.display_hours.unwrap_or(true)
    }

    /// Caption for a unit, before upper-casing.
    pub fn label(&self, unit: Unit) -> &str {
        match unit {
            Unit::Days => or_default(&self.label_days, "Days"),
            Unit::Hours => or_default(&self.label_hours, "Hours"),
            Unit::Minutes => or_default(&self.label_minutes, "Minutes"),
            Unit::Seconds => or_default(&self.label_seconds, "Seconds"),
        }
    }

    pub fn template(&self) -> &str {
        or_default(&self.template, DEFAULT_TEMPLATE)
    }

    pub fn font(&self) -> &str {
        or_default(&self.font, DEFAULT_FONT)
    }

    pub fn background_color(&self) -> Result<Rgba<u8>, CountdownError> {
        parse_color(or_default(&self.background_color, DEFAULT_BACKGROUND_COLOR))
    }

    pub fn box_color(&self) -> Result<Rgba<u8>, CountdownError> {
        parse_color(or_default(&self.box_color, DEFAULT_BOX_COLOR))
    }

    pub fn text_color(&self) -> Result<Rgba<u8>, CountdownError> {
        parse_color(or_default(&self.text_color, DEFAULT_TEXT_COLOR))
    }

    pub fn label_color(&self) -> Result<Rgba<u8>, CountdownError> {
        parse_color(or_default(&self.label_color, DEFAULT_LABEL_COLOR))
    }
}

/// Parse a CSS-style color string.
///
/// Supports `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` with `a` in `0..=1`, and a handful of keywords.
pub fn parse_color(input: &str) -> Result<Rgba<u8>, CountdownError> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || CountdownError::Color(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    if let Some(args) = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args).ok_or_else(invalid);
    }

    let rgba = match s.as_str() {
        "white" => [255, 255, 255, 255],
        "black" => [0, 0, 0, 255],
        "transparent" => [0, 0, 0, 0],
        "red" => [255, 0, 0, 255],
        "green" => [0, 128, 0, 255],
        "blue" => [0, 0, 255, 255],
        "orange" => [255, 165, 0, 255],
        "gray" | "grey" => [128, 128, 128, 255],
        _ => return Err(invalid()),
    };
    Ok(Rgba(rgba))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
        4 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?])),
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |s: &str| -> Option<u8> {
        let v: f32 = s.parse().ok()?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };

    let alpha = match parts.get(3) {
        Some(a) => {
            let v: f32 = a.parse().ok()?;
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };

    Some(Rgba([
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ]))
}
