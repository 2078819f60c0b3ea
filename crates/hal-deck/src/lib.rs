//! Deck map and navigation state machine for the HAL9000 agent.
//!
//! The deck is a static character grid. A [`Navigator`] owns the agent's
//! position on it and classifies every move attempt as moved, moved through a
//! doorway, blocked, or invalid, without ever failing.

/// Error types for navigator construction.
pub mod error;
/// The static deck layout and terrain classification.
pub mod map;
/// The navigation state machine.
pub mod navigator;
/// Grid coordinates and directions.
pub mod position;

pub use error::{DeckError, DeckResult};
pub use map::{DeckMap, Terrain};
pub use navigator::{MARKER, MoveOutcome, MoveReport, Navigator};
pub use position::{Direction, Position};
