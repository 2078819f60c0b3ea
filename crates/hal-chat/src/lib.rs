//! Ordered pattern-to-response matching for the HAL9000 agent.
//!
//! A [`RuleSet`] is a fixed list of rules, each pairing a case-insensitive
//! trigger pattern with candidate reply templates. The first rule whose
//! pattern matches the whole input line fires; one of its templates is picked
//! at random and `%1`-style placeholders are filled from the pattern's
//! capture groups. A mandatory catch-all rule closes every list, so every
//! input gets a reply.

/// Error types for rule construction.
pub mod error;
/// Response engine that owns a rule set and its random source.
pub mod engine;
/// Word reflection table for captured text.
pub mod reflections;
/// Single rules and validated rule lists.
pub mod rule;
/// The built-in HAL9000 conversation rules.
pub mod rules;

pub use engine::ResponseEngine;
pub use error::{ChatError, ChatResult};
pub use reflections::Reflections;
pub use rule::{Rule, RuleSet};
pub use rules::hal_rules;
