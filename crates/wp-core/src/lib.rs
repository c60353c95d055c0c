//! Core types for WuWa Picker: characters, rosters, and roster loading.
//!
//! This crate defines the data model that the selection modes operate on.
//! It is independent of any frontend: a [`Roster`] can be built in code or
//! loaded from a CSV export with [`loader::load_roster`].

/// Character records and their stable identifiers.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// CSV roster loading and header validation.
pub mod loader;
/// The ordered, read-only character roster.
pub mod roster;

/// Re-export character types.
pub use character::{Character, CharacterId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export roster loading.
pub use loader::{load_roster, read_roster};
/// Re-export the roster.
pub use roster::Roster;
