//! Horizontal layout of unit boxes.
//!
//! The canvas is sized from its content: boxes sit in a single row with a
//! uniform gap, surrounded by padding, with a band under the row reserved
//! for labels.

/// Side length of a unit box.
pub const BOX_SIZE: u32 = 80;
/// Horizontal space between adjacent boxes.
pub const GAP: u32 = 16;
/// Space between the canvas edge and the content.
pub const PADDING: u32 = 24;
/// Height of the band under the boxes reserved for outside labels.
pub const LABEL_HEIGHT: u32 = 20;
/// Extra space under the label band.
pub const BOTTOM_MARGIN: u32 = 8;

/// Top-left corner and size of one unit box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl BoxRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Canvas dimensions and box placement for a fixed number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub units: usize,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn new(units: usize) -> Self {
        let n = units as u32;
        let width = 2 * PADDING + n * BOX_SIZE + n.saturating_sub(1) * GAP;
        let height = 2 * PADDING + BOX_SIZE + LABEL_HEIGHT + BOTTOM_MARGIN;
        Self {
            units,
            width,
            height,
        }
    }

    /// Box `index`, counted left to right.
    pub fn box_rect(&self, index: usize) -> BoxRect {
        BoxRect {
            x: (PADDING + index as u32 * (BOX_SIZE + GAP)) as f32,
            y: PADDING as f32,
            size: BOX_SIZE as f32,
        }
    }

    pub fn boxes(&self) -> impl Iterator<Item = BoxRect> + '_ {
        (0..self.units).map(|i| self.box_rect(i))
    }
}
