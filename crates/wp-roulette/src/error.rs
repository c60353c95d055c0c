//! Error types for the selection modes.

use thiserror::Error;

/// Result type for selection operations.
pub type RouletteResult<T> = Result<T, RouletteError>;

/// Errors that can occur while picking characters.
///
/// Running out of characters during a roulette session is not an error; it
/// is reported through [`crate::SessionState::PoolExhausted`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouletteError {
    /// A random pick was requested from a roster with no characters.
    #[error("the roster has no characters to pick from")]
    EmptyRoster,
}
