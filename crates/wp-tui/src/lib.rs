//! Terminal UI for WuWa Picker.
//!
//! Renders the menu, random picks and roulette rounds with ratatui and
//! reads single key presses through crossterm. The [`presenter::TuiPresenter`]
//! implements the same presenter contract as the line-based console, so the
//! roulette state machine is unaware of which one drives it.

pub mod keys;
pub mod presenter;
pub mod terminal;
pub mod views;
