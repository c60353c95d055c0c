//! Key input sources.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something that yields one key press at a time, blocking until it has one.
pub trait KeySource {
    /// Wait for the next key press.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Reads key presses from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }
}

/// Replays a fixed sequence of keys, then reports `q` forever.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Script the given characters as plain key presses.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            keys: chars
                .chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .collect(),
        }
    }

    /// Append an arbitrary key event.
    pub fn push(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        Ok(self
            .keys
            .pop_front()
            .unwrap_or_else(|| KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
    }
}

/// The text a key stands for when answering a prompt.
///
/// Ctrl+C and Esc count as `q`; keys without text map to an empty string.
pub fn key_text(key: KeyEvent) -> String {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => "q".to_string(),
        KeyCode::Esc => "q".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => String::new(),
    }
}
