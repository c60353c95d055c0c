//! Character card: a titled panel with the character's stats.

use wp_core::Character;

use super::Rect2;
use super::panel::{TITLE_STRIP, draw_panel_titled};
use crate::theme::text::{LINE_HEIGHT, draw_pixel_text};
use crate::theme::{element_color, palette};

/// Canvas height of a card with all stat lines.
pub const CARD_H: f32 = TITLE_STRIP + 12.0 * LINE_HEIGHT;

/// Stat lines shown on a card body: the shared card text minus its rules
/// and name line, which the panel title replaces.
pub fn card_body(character: &Character) -> Vec<String> {
    character
        .card_lines()
        .into_iter()
        .skip(3)
        .filter(|line| !line.starts_with('='))
        .collect()
}

/// Draw a card. `label` prefixes the title with a selection number.
pub fn draw_card(character: &Character, area: &Rect2, label: Option<usize>, hovered: bool) {
    let title = match label {
        Some(n) => format!("[{n}] {}", character.name),
        None => character.name.clone(),
    };
    let border = if hovered {
        palette::YELLOW
    } else {
        palette::LIGHT_GRAY
    };
    draw_panel_titled(area, &title, border, element_color(&character.element));

    let mut y = area.y + TITLE_STRIP + 4.0;
    for line in card_body(character) {
        if y + LINE_HEIGHT > area.y + area.h {
            break;
        }
        let color = if line.starts_with("Element:") {
            element_color(&character.element)
        } else {
            palette::WHITE
        };
        draw_pixel_text(&line, area.x + 6.0, y, color);
        y += LINE_HEIGHT;
    }
}
