//! Terminal front end for the HAL9000 agent.
//!
//! Provides a ratatui chat window with a scrolling log and an input line, a
//! plain line-oriented console mode, and a speech stand-in that reports
//! utterances through tracing.

pub mod app;
pub mod log_pane;
pub mod plain;
pub mod speech;
pub mod terminal;
