//! Random pick screen: one card, re-rolled on demand.

use wp_core::Character;
use wp_roulette::{RandomChoice, pick_one};

use crate::app::AppState;
use crate::input::{clicked_at, enter_pressed, escape_pressed, typed_key};
use crate::theme::text::draw_text_centered;
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_button;
use crate::widget::card::{CARD_H, draw_card};

use super::{Screen, Transition};

const CARD_W: f32 = 200.0;

fn card_area() -> Rect2 {
    Rect2::new((CANVAS_W - CARD_W) / 2.0, 40.0, CARD_W, CARD_H)
}

/// Buttons for "again" and "menu", left to right.
fn buttons() -> [Rect2; 2] {
    let y = 40.0 + CARD_H + 12.0;
    let w = 96.0;
    let gap = 8.0;
    let x = (CANVAS_W - (w * 2.0 + gap)) / 2.0;
    [
        Rect2::new(x, y, w, 16.0),
        Rect2::new(x + w + gap, y, w, 16.0),
    ]
}

/// Random pick screen state.
pub struct RandomScreen<'r> {
    /// The character currently shown; `None` when the roster is empty.
    current: Option<&'r Character>,
}

impl<'r> RandomScreen<'r> {
    /// Create the screen and make the first pick.
    pub fn new(app: &mut AppState<'r>) -> Self {
        let mut screen = Self { current: None };
        screen.pick(app);
        screen
    }

    fn pick(&mut self, app: &mut AppState<'r>) {
        self.current = pick_one(app.roster, &mut app.rng).ok();
        if let Some(c) = self.current {
            tracing::debug!(character = %c, "random pick");
        }
    }
}

impl<'r> Screen<'r> for RandomScreen<'r> {
    fn update(&mut self, app: &mut AppState<'r>) -> Transition {
        if escape_pressed() {
            return Transition::Pop;
        }
        // With nothing to show, any key returns to the menu.
        if self.current.is_none() {
            if typed_key().is_some() || enter_pressed() || clicked_at().is_some() {
                return Transition::Pop;
            }
            return Transition::None;
        }

        let mut choice = typed_key().map(|ch| RandomChoice::from_key(&ch.to_string()));
        if enter_pressed() {
            choice = Some(RandomChoice::Again);
        }
        if let Some((mx, my)) = clicked_at() {
            let [again, back] = buttons();
            if again.contains(mx, my) {
                choice = Some(RandomChoice::Again);
            } else if back.contains(mx, my) {
                choice = Some(RandomChoice::Back);
            }
        }

        match choice {
            Some(RandomChoice::Again) => {
                self.pick(app);
                Transition::None
            }
            Some(RandomChoice::Back) => Transition::Pop,
            None => Transition::None,
        }
    }

    fn draw(&self, app: &AppState<'r>) {
        let (mx, my) = mouse_canvas_position();
        draw_text_centered(&app.modes.random, 0.0, MARGIN * 2.0, CANVAS_W, palette::YELLOW);

        let Some(character) = self.current else {
            draw_text_centered(
                "Warning: The roster has no characters to pick from.",
                0.0,
                120.0,
                CANVAS_W,
                palette::ORANGE,
            );
            draw_text_centered(
                "Press any key to continue",
                0.0,
                CANVAS_H - 20.0,
                CANVAS_W,
                palette::DARK_GRAY,
            );
            return;
        };

        draw_card(character, &card_area(), None, false);
        let [again, back] = buttons();
        draw_button("AGAIN", &again, mx, my);
        draw_button("MENU", &back, mx, my);

        draw_text_centered(
            "n / Enter: pick another  |  q / Esc: menu",
            0.0,
            CANVAS_H - 20.0,
            CANVAS_W,
            palette::DARK_GRAY,
        );
    }
}
