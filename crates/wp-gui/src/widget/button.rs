//! Clickable button widget with hover state.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::palette;
use crate::theme::text::{FONT_SIZE, draw_text_centered};

/// Draw a button, highlighted while the mouse hovers over it.
pub fn draw_button(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) {
    let hovered = area.contains(mouse_x, mouse_y);
    let (border, text_color) = if hovered {
        (palette::YELLOW, palette::YELLOW)
    } else {
        (palette::LIGHT_GRAY, palette::WHITE)
    };

    super::bordered_rect(area.x, area.y, area.w, area.h, palette::DARK_BLUE, border);
    let ty = area.y + (area.h - FONT_SIZE) / 2.0;
    draw_text_centered(label, area.x, ty, area.w, text_color);
}
