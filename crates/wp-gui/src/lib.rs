//! Pixel art GUI for WuWa Picker.
//!
//! A macroquad application with the same two modes as the console:
//! a random character pick and the team roulette, drawn as cards on a
//! scaled virtual canvas.

pub mod app;
pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
