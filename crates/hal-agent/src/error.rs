//! Error types for agent setup.

use thiserror::Error;

/// Result type for agent setup.
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors that can occur while building an agent.
///
/// Once built, an agent handles every input without error.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The conversation rules are malformed.
    #[error("{0}")]
    Chat(#[from] hal_chat::ChatError),

    /// The deck or starting position is unusable.
    #[error("{0}")]
    Deck(#[from] hal_deck::DeckError),
}
