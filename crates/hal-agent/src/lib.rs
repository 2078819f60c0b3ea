//! The HAL9000 agent: routes operator input to the response engine or the
//! deck navigator and forwards the results to display and speech.
//!
//! [`Agent`] turns each line into a list of [`Effect`]s without touching any
//! output device. [`Coordinator`] owns an agent plus one [`Display`] and one
//! [`Speech`] collaborator and delivers those effects.

/// Command-line parsing for operator input.
pub mod command;
/// Agent configuration.
pub mod config;
/// Display and speech capabilities.
pub mod collaborator;
/// Coordinator wiring an agent to its collaborators.
pub mod coordinator;
/// The agent itself.
pub mod agent;
/// Error types for agent setup.
pub mod error;

pub use agent::{Agent, Effect, UNKNOWN_COMMAND_REPLY};
pub use collaborator::{
    Align, Display, LineStyle, RecordedSpeech, SilentSpeech, Speech, Transcript,
};
pub use command::{Command, Input};
pub use config::AgentConfig;
pub use coordinator::{Control, Coordinator};
pub use error::{AgentError, AgentResult};
