//! Pixel art widgets: panels, buttons and character cards.

pub mod button;
pub mod card;
pub mod panel;

use macroquad::prelude::*;

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(x: f32, y: f32, w: f32, h: f32, fill: Color, border: Color) {
    draw_rectangle(x, y, w, h, fill);
    draw_rectangle(x, y, w, 1.0, border);
    draw_rectangle(x, y + h - 1.0, w, 1.0, border);
    draw_rectangle(x, y, 1.0, h, border);
    draw_rectangle(x + w - 1.0, y, 1.0, h, border);
}

/// Draw a double-border pixel panel (2px border, inner line blended).
pub fn double_bordered_rect(x: f32, y: f32, w: f32, h: f32, fill: Color, border: Color) {
    bordered_rect(x, y, w, h, fill, border);
    let inner = Color::new(
        border.r * 0.7 + fill.r * 0.3,
        border.g * 0.7 + fill.g * 0.3,
        border.b * 0.7 + fill.b * 0.3,
        1.0,
    );
    draw_rectangle(x + 1.0, y + 1.0, w - 2.0, 1.0, inner);
    draw_rectangle(x + 1.0, y + h - 2.0, w - 2.0, 1.0, inner);
    draw_rectangle(x + 1.0, y + 1.0, 1.0, h - 2.0, inner);
    draw_rectangle(x + w - 2.0, y + 1.0, 1.0, h - 2.0, inner);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Split into `count` equal columns separated by `gap`.
    pub fn columns(&self, count: usize, gap: f32) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let gaps = gap * (count - 1) as f32;
        let w = ((self.w - gaps) / count as f32).max(0.0);
        (0..count)
            .map(|i| Self::new(self.x + i as f32 * (w + gap), self.y, w, self.h))
            .collect()
    }
}
