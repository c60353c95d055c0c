//! Screen layouts: a title bar on top, a prompt line at the bottom and the
//! screen's own content in between.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use wp_core::Character;
use wp_roulette::{ModeNames, RoundContext};

/// Title shown above the mode menu.
pub const APP_TITLE: &str = "Wuthering Waves Character Picker";

/// Rows taken by one bordered character card.
const CARD_HEIGHT: u16 = 13;

/// Draw the title bar and prompt line, returning the area between them.
fn chrome(frame: &mut Frame, title: &str, prompt: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Prompt
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(title.to_string()).style(Style::default().bold()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, chunks[0]);

    let prompt = Paragraph::new(Line::from(Span::styled(
        prompt.to_string(),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(prompt, chunks[2]);

    chunks[1]
}

/// A bordered card with the character's stats. The card's own rules and
/// name line are replaced by the block title.
pub fn card(character: &Character, label: Option<usize>) -> Paragraph<'static> {
    let title = match label {
        Some(n) => format!(" [{n}] {} ", character.name),
        None => format!(" {} ", character.name),
    };
    let lines: Vec<Line> = character
        .card_lines()
        .into_iter()
        .skip(3)
        .filter(|line| !line.starts_with('='))
        .map(Line::from)
        .collect();
    Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
}

/// Render cards side by side in equal columns.
fn draw_card_row(frame: &mut Frame, characters: &[&Character], labelled: bool, area: Rect) {
    if characters.is_empty() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, characters.len() as u32);
            characters.len()
        ])
        .split(area);
    for (i, (character, column)) in characters.iter().zip(columns.iter()).enumerate() {
        let label = labelled.then_some(i + 1);
        frame.render_widget(card(character, label), *column);
    }
}

/// One summary line per team.
pub fn team_lines<'a>(teams: &[Vec<&Character>]) -> Vec<Line<'a>> {
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let members = team
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join("  ·  ");
            Line::from(vec![
                Span::styled(
                    format!("Team {}: ", i + 1),
                    Style::default().fg(Color::Green).bold(),
                ),
                Span::raw(members),
            ])
        })
        .collect()
}

/// The mode menu.
pub fn draw_menu(frame: &mut Frame, modes: &ModeNames, prompt: &str) {
    let body = chrome(frame, APP_TITLE, prompt);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  [1] ", Style::default().fg(Color::Yellow).bold()),
            Span::raw(modes.random.clone()),
        ]),
        Line::from(vec![
            Span::styled("  [2] ", Style::default().fg(Color::Yellow).bold()),
            Span::raw(modes.roulette.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), body);
}

/// A single randomly picked character.
pub fn draw_random(frame: &mut Frame, title: &str, character: &Character, prompt: &str) {
    let body = chrome(frame, title, prompt);
    let area = Rect {
        width: body.width.min(40),
        height: body.height.min(CARD_HEIGHT),
        ..body
    };
    frame.render_widget(card(character, None), area);
}

/// A roulette round: earlier teams, the team so far, then the candidates.
pub fn draw_round(
    frame: &mut Frame,
    title: &str,
    candidates: &[&Character],
    context: &RoundContext<'_>,
    prompt: &str,
) {
    let body = chrome(frame, title, prompt);

    let mut summary = team_lines(&context.prior_teams);
    if !context.in_progress.is_empty() {
        let so_far = context
            .in_progress
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("  ·  ");
        summary.push(Line::from(vec![
            Span::styled(
                format!("Team {} so far: ", context.team_index + 1),
                Style::default().fg(Color::Green),
            ),
            Span::raw(so_far),
        ]));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.len() as u16),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);

    frame.render_widget(Paragraph::new(summary).wrap(Wrap { trim: false }), chunks[0]);
    draw_card_row(frame, candidates, true, chunks[1]);
}

/// The completed teams of a session.
pub fn draw_teams(frame: &mut Frame, title: &str, teams: &[Vec<&Character>], prompt: &str) {
    let body = chrome(frame, title, prompt);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(CARD_HEIGHT)])
        .split(body);

    frame.render_widget(
        Paragraph::new(team_lines(teams)).wrap(Wrap { trim: false }),
        chunks[0],
    );
    // The latest team also gets full cards.
    if let Some(last) = teams.last() {
        draw_card_row(frame, last, false, chunks[1]);
    }
}

/// A warning with a few lines of explanation.
pub fn draw_notice(frame: &mut Frame, title: &str, lines: &[String], prompt: &str) {
    let body = chrome(frame, title, prompt);
    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(Span::styled(
                    line.clone(),
                    Style::default().fg(Color::Yellow).bold(),
                ))
            } else {
                Line::from(line.clone())
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), body);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    fn rendered(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn menu_lists_both_modes() {
        let out = rendered(60, 12, |f| draw_menu(f, &ModeNames::default(), "Select"));
        assert!(out.contains(APP_TITLE));
        assert!(out.contains("[1] Random Character"));
        assert!(out.contains("[2] Abyss Roulette"));
        assert!(out.contains("Select"));
    }

    #[test]
    fn round_shows_labelled_candidates() {
        let a = Character::new("Jiyan", "Aero");
        let b = Character::new("Verina", "Spectro");
        let c = Character::new("Sanhua", "Glacio");
        let done = Character::new("Rover", "Havoc");
        let context = RoundContext {
            round: 1,
            team_index: 1,
            prior_teams: vec![vec![&done, &done, &done]],
            in_progress: vec![&done],
        };
        let out = rendered(120, 24, |f| {
            draw_round(f, "Round 2/3", &[&a, &b, &c], &context, "Pick")
        });
        assert!(out.contains("[1] Jiyan"));
        assert!(out.contains("[2] Verina"));
        assert!(out.contains("[3] Sanhua"));
        assert!(out.contains("Team 1: Rover (Havoc, S0)"));
        assert!(out.contains("Team 2 so far: Rover (Havoc, S0)"));
        assert!(out.contains("Element: Glacio"));
    }

    #[test]
    fn card_drops_rules() {
        let c = Character::new("Encore", "Fusion");
        let out = rendered(40, CARD_HEIGHT, |f| f.render_widget(card(&c, Some(2)), f.area()));
        assert!(out.contains("[2] Encore"));
        assert!(out.contains("Level: 1"));
        assert!(!out.contains("===="));
    }
}
