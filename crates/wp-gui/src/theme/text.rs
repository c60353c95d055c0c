//! Text rendering with macroquad's built-in font at a fixed small size.

use macroquad::prelude::*;

/// Font size used for all text on the canvas.
pub const FONT_SIZE: f32 = 10.0;
/// Vertical distance between consecutive text lines.
pub const LINE_HEIGHT: f32 = 11.0;

/// Distance from the top of a line to its baseline.
const BASELINE: f32 = 8.0;

/// Draw text with its top-left corner at `(x, y)`.
pub fn draw_pixel_text(text: &str, x: f32, y: f32, color: Color) {
    draw_text(text, x.round(), (y + BASELINE).round(), FONT_SIZE, color);
}

/// Width of `text` when drawn with [`draw_pixel_text`].
pub fn measure_text_width(text: &str) -> f32 {
    measure_text(text, None, FONT_SIZE as u16, 1.0).width
}

/// Draw text centered horizontally within `[x, x + w)`.
pub fn draw_text_centered(text: &str, x: f32, y: f32, w: f32, color: Color) {
    let cx = x + (w - measure_text_width(text)) / 2.0;
    draw_pixel_text(text, cx.max(x), y, color);
}
