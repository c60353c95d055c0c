//! Input helpers for keyboard and mouse events.

use macroquad::prelude::*;

/// The first printable character typed this frame, draining the rest.
pub fn typed_key() -> Option<char> {
    let mut first = None;
    while let Some(ch) = get_char_pressed() {
        if first.is_none() && (' '..='~').contains(&ch) {
            first = Some(ch);
        }
    }
    first
}

/// Check if the Enter key was pressed this frame.
pub fn enter_pressed() -> bool {
    is_key_pressed(KeyCode::Enter)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Canvas position of a left click made this frame.
pub fn clicked_at() -> Option<(f32, f32)> {
    is_mouse_button_pressed(MouseButton::Left).then(crate::theme::mouse_canvas_position)
}
