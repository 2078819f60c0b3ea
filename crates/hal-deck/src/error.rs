//! Error types for the deck.

use thiserror::Error;

use crate::position::Position;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors raised while setting up navigation.
///
/// Move attempts never produce these; they resolve to a
/// [`MoveOutcome`](crate::MoveOutcome) instead.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The starting position is off the map or not standable.
    #[error("cannot start at {0}: not open floor or a doorway")]
    InvalidStart(Position),

    /// The deck layout has no rows.
    #[error("deck map is empty")]
    EmptyMap,
}
