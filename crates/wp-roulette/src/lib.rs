//! Selection modes for WuWa Picker.
//!
//! Provides the single random pick, the team roulette state machine with its
//! shrinking character pool, the [`Presenter`] contract that frontends
//! implement, and the outer menu loop that dispatches between the two modes.

pub mod app;
pub mod config;
pub mod error;
pub mod picker;
pub mod pool;
pub mod presenter;
pub mod session;
pub mod team;

pub use app::{App, Frontend, MenuChoice, RandomChoice};
pub use config::{ModeNames, RouletteConfig};
pub use error::{RouletteError, RouletteResult};
pub use picker::pick_one;
pub use pool::Pool;
pub use presenter::{Presenter, RoundContext, run_session};
pub use session::{RouletteSession, SessionEnd, SessionOutcome, SessionState, UserChoice};
pub use team::Team;
