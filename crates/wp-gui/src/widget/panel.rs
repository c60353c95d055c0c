//! Pixel art panels with optional title strip.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::palette;
use crate::theme::text::draw_text_centered;

/// Height of the title strip drawn by [`draw_panel_titled`].
pub const TITLE_STRIP: f32 = 14.0;

/// Draw a panel with pixel art borders.
pub fn draw_panel(area: &Rect2, border: Color) {
    super::double_bordered_rect(area.x, area.y, area.w, area.h, palette::DARK_BLUE, border);
}

/// Draw a panel with a title inside the top strip.
///
/// Content should start at `area.y + TITLE_STRIP + 2.0`.
pub fn draw_panel_titled(area: &Rect2, title: &str, border: Color, title_color: Color) {
    draw_panel(area, border);
    draw_rectangle(
        area.x + 2.0,
        area.y + 2.0,
        area.w - 4.0,
        TITLE_STRIP - 2.0,
        palette::BLACK,
    );
    draw_text_centered(title, area.x, area.y + 3.0, area.w, title_color);
}
