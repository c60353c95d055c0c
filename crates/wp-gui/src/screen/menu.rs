//! Mode menu: random pick, roulette, or quit.

use macroquad::prelude::*;

use wp_roulette::MenuChoice;

use crate::app::AppState;
use crate::input::{clicked_at, escape_pressed, typed_key};
use crate::theme::text::{draw_pixel_text, draw_text_centered, measure_text_width};
use crate::theme::{CANVAS_H, CANVAS_W, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_button;

use super::{Screen, ScreenId, Transition};

const BUTTON_W: f32 = 180.0;
const BUTTON_H: f32 = 18.0;

/// Button areas for random, roulette and quit, top to bottom.
fn buttons() -> [Rect2; 3] {
    let x = (CANVAS_W - BUTTON_W) / 2.0;
    [
        Rect2::new(x, 130.0, BUTTON_W, BUTTON_H),
        Rect2::new(x, 156.0, BUTTON_W, BUTTON_H),
        Rect2::new(x, 196.0, BUTTON_W, BUTTON_H),
    ]
}

/// Menu screen. Stateless; everything it shows lives in [`AppState`].
#[derive(Debug, Default)]
pub struct MenuScreen;

impl MenuScreen {
    /// Create the menu screen.
    pub fn new() -> Self {
        Self
    }
}

impl<'r> Screen<'r> for MenuScreen {
    fn update(&mut self, app: &mut AppState<'r>) -> Transition {
        let mut choice = typed_key()
            .map(|ch| MenuChoice::from_key(&ch.to_string()))
            .unwrap_or(MenuChoice::Other);
        if escape_pressed() {
            choice = MenuChoice::Quit;
        }
        if let Some((mx, my)) = clicked_at() {
            let [random, roulette, quit] = buttons();
            if random.contains(mx, my) {
                choice = MenuChoice::Random;
            } else if roulette.contains(mx, my) {
                choice = MenuChoice::Roulette;
            } else if quit.contains(mx, my) {
                choice = MenuChoice::Quit;
            }
        }

        match choice {
            MenuChoice::Random => Transition::Push(ScreenId::Random),
            MenuChoice::Roulette => Transition::Push(ScreenId::Roulette),
            MenuChoice::Quit => {
                app.should_quit = true;
                Transition::None
            }
            MenuChoice::Other => Transition::None,
        }
    }

    fn draw(&self, app: &AppState<'r>) {
        let (mx, my) = mouse_canvas_position();

        draw_text_centered(
            "WUTHERING WAVES CHARACTER PICKER",
            0.0,
            60.0,
            CANVAS_W,
            palette::YELLOW,
        );
        let count = format!("{} characters in roster", app.roster.len());
        draw_text_centered(&count, 0.0, 78.0, CANVAS_W, palette::LIGHT_GRAY);

        let line_w = 240.0;
        draw_rectangle(
            (CANVAS_W - line_w) / 2.0,
            96.0,
            line_w,
            1.0,
            palette::DARK_GRAY,
        );

        let [random, roulette, quit] = buttons();
        draw_button(&format!("1. {}", app.modes.random), &random, mx, my);
        draw_button(&format!("2. {}", app.modes.roulette), &roulette, mx, my);
        draw_button("QUIT", &quit, mx, my);

        if let Some(ref err) = app.error {
            let x = ((CANVAS_W - measure_text_width(err)) / 2.0).max(4.0);
            draw_pixel_text(err, x, 230.0, palette::RED);
        }

        draw_text_centered(
            "1 / 2: choose mode  |  q / Esc: quit",
            0.0,
            CANVAS_H - 20.0,
            CANVAS_W,
            palette::DARK_GRAY,
        );
    }
}
