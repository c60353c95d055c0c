//! Roulette screen: drives a [`RouletteSession`] one input per frame.

use wp_core::Character;
use wp_roulette::{RouletteSession, SessionState, UserChoice};

use crate::app::AppState;
use crate::input::{clicked_at, enter_pressed, escape_pressed, typed_key};
use crate::theme::text::{LINE_HEIGHT, draw_pixel_text, draw_text_centered};
use crate::theme::{CANVAS_H, CANVAS_W, MARGIN, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::draw_button;
use crate::widget::card::{CARD_H, draw_card};

use super::{Screen, Transition};

const SUMMARY_Y: f32 = 32.0;
const CARDS_Y: f32 = 160.0;
const BUTTONS_Y: f32 = CARDS_Y + CARD_H + 6.0;
const COLUMN_GAP: f32 = 8.0;

fn card_row(count: usize) -> Vec<Rect2> {
    Rect2::new(MARGIN, CARDS_Y, CANVAS_W - MARGIN * 2.0, CARD_H).columns(count, COLUMN_GAP)
}

/// Buttons for the two answers of a prompt, left to right.
fn buttons() -> [Rect2; 2] {
    let w = 120.0;
    let gap = 8.0;
    let x = (CANVAS_W - (w * 2.0 + gap)) / 2.0;
    [
        Rect2::new(x, BUTTONS_Y, w, 16.0),
        Rect2::new(x + w + gap, BUTTONS_Y, w, 16.0),
    ]
}

/// One summary line for a team.
pub fn team_line(index: usize, members: &[&Character]) -> String {
    let names = members
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" / ");
    format!("Team {}: {names}", index + 1)
}

/// Keep the most recent `lines` that fit in `rows`. When some are dropped,
/// the first row counts them instead.
pub fn fit_summary(lines: Vec<String>, rows: usize) -> Vec<String> {
    if lines.len() <= rows {
        return lines;
    }
    let Some(keep) = rows.checked_sub(1) else {
        return Vec::new();
    };
    let hidden = lines.len() - keep;
    let mut fitted = vec![format!("... {hidden} earlier teams")];
    fitted.extend(lines.into_iter().skip(hidden));
    fitted
}

/// Number of text rows between `top` and `bottom`.
fn rows_between(top: f32, bottom: f32) -> usize {
    ((bottom - top) / LINE_HEIGHT).max(0.0) as usize
}

/// Roulette screen state.
pub struct RouletteScreen<'r> {
    session: RouletteSession<'r>,
}

impl<'r> RouletteScreen<'r> {
    /// Start a fresh session.
    pub fn new(app: &mut AppState<'r>) -> Self {
        Self {
            session: app.new_session(),
        }
    }

    fn update_round(&mut self) {
        let mut choice = typed_key().map(|ch| UserChoice::from_key(&ch.to_string()));
        if escape_pressed() {
            choice = Some(UserChoice::Quit);
        }
        if let Some((mx, my)) = clicked_at() {
            let slots = card_row(self.session.candidate_ids().len());
            if let Some(i) = slots.iter().position(|slot| slot.contains(mx, my)) {
                choice = Some(UserChoice::Select(i + 1));
            }
        }
        if let Some(choice) = choice {
            self.session.choose(choice);
        }
    }

    fn update_team_complete(&mut self) {
        let mut answer = typed_key().map(|ch| ch.eq_ignore_ascii_case(&'n'));
        if escape_pressed() {
            answer = Some(false);
        }
        if let Some((mx, my)) = clicked_at() {
            let [another, menu] = buttons();
            if another.contains(mx, my) {
                answer = Some(true);
            } else if menu.contains(mx, my) {
                answer = Some(false);
            }
        }
        if let Some(answer) = answer {
            self.session.answer_continue(answer);
        }
    }

    /// Draw team lines from `top`, clipped above `bottom`.
    fn draw_summary(&self, lines: Vec<String>, top: f32, bottom: f32) -> f32 {
        let mut y = top;
        for line in fit_summary(lines, rows_between(top, bottom)) {
            draw_pixel_text(&line, MARGIN, y, palette::GREEN);
            y += LINE_HEIGHT;
        }
        y
    }

    fn team_lines(&self) -> Vec<String> {
        self.session
            .resolved_teams()
            .iter()
            .enumerate()
            .map(|(i, team)| team_line(i, team))
            .collect()
    }

    fn draw_round(&self, app: &AppState<'r>, round: usize, mx: f32, my: f32) {
        let title = format!("{}: Round {}/3", app.modes.roulette, round + 1);
        draw_text_centered(&title, 0.0, MARGIN * 2.0, CANVAS_W, palette::YELLOW);

        // The team being built keeps the last row above the cards.
        let in_progress = self.session.resolved_in_progress();
        let bottom = if in_progress.is_empty() {
            CARDS_Y
        } else {
            CARDS_Y - LINE_HEIGHT
        };
        let y = self.draw_summary(self.team_lines(), SUMMARY_Y, bottom);
        if !in_progress.is_empty() {
            let line = team_line(self.session.team_index(), &in_progress);
            draw_pixel_text(&format!("{line} (so far)"), MARGIN, y, palette::LIGHT_GRAY);
        }

        let candidates = self.session.candidates();
        for (i, (character, slot)) in candidates
            .iter()
            .zip(card_row(candidates.len()))
            .enumerate()
        {
            draw_card(character, &slot, Some(i + 1), slot.contains(mx, my));
        }

        draw_text_centered(
            "1-3 / click: select  |  q / Esc: menu",
            0.0,
            CANVAS_H - 16.0,
            CANVAS_W,
            palette::DARK_GRAY,
        );
    }

    fn draw_team_complete(&self, app: &AppState<'r>, mx: f32, my: f32) {
        let title = format!("{}: Your Teams", app.modes.roulette);
        draw_text_centered(&title, 0.0, MARGIN * 2.0, CANVAS_W, palette::YELLOW);
        self.draw_summary(self.team_lines(), SUMMARY_Y, CARDS_Y);

        // The team just finished is also shown as cards.
        if let Some(last) = self.session.resolved_teams().last() {
            for (character, slot) in last.iter().zip(card_row(last.len())) {
                draw_card(character, &slot, None, false);
            }
        }

        let [another, menu] = buttons();
        draw_button("ANOTHER TEAM", &another, mx, my);
        draw_button("MENU", &menu, mx, my);
        draw_text_centered(
            "n: another team  |  any other key: menu",
            0.0,
            CANVAS_H - 16.0,
            CANVAS_W,
            palette::DARK_GRAY,
        );
    }

    fn draw_exhausted(&self, app: &AppState<'r>, mx: f32, my: f32) {
        draw_text_centered(&app.modes.roulette, 0.0, MARGIN * 2.0, CANVAS_W, palette::YELLOW);
        let warning = format!(
            "Warning: Not enough characters left for {} ({} remaining)!",
            app.modes.roulette,
            self.session.pool().len()
        );
        draw_text_centered(&warning, 0.0, 60.0, CANVAS_W, palette::ORANGE);
        draw_text_centered(
            "Returning to the main menu.",
            0.0,
            60.0 + LINE_HEIGHT,
            CANVAS_W,
            palette::WHITE,
        );
        self.draw_summary(self.team_lines(), 60.0 + LINE_HEIGHT * 3.0, BUTTONS_Y);

        let [_, menu] = buttons();
        draw_button("MENU", &menu, mx, my);
    }
}

impl<'r> Screen<'r> for RouletteScreen<'r> {
    fn update(&mut self, _app: &mut AppState<'r>) -> Transition {
        match self.session.state() {
            SessionState::AwaitingRoundChoice { .. } => self.update_round(),
            SessionState::TeamComplete => self.update_team_complete(),
            SessionState::PoolExhausted => {
                if typed_key().is_some()
                    || enter_pressed()
                    || escape_pressed()
                    || clicked_at().is_some()
                {
                    return Transition::Pop;
                }
            }
            SessionState::Quit => {}
        }

        if self.session.state() == SessionState::Quit {
            tracing::debug!(teams = self.session.teams().len(), "roulette quit");
            return Transition::Pop;
        }
        Transition::None
    }

    fn draw(&self, app: &AppState<'r>) {
        let (mx, my) = mouse_canvas_position();
        match self.session.state() {
            SessionState::AwaitingRoundChoice { round } => self.draw_round(app, round, mx, my),
            SessionState::TeamComplete => self.draw_team_complete(app, mx, my),
            SessionState::PoolExhausted => self.draw_exhausted(app, mx, my),
            SessionState::Quit => {}
        }
    }
}
