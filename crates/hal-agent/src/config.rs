//! Configuration for the agent.

use std::time::Duration;

use hal_deck::{MARKER, Position};

/// Configuration for an agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Name shown when the agent joins.
    pub name: String,
    /// RNG seed for reproducible reply selection.
    pub seed: u64,
    /// Starting cell on the deck.
    pub start: Position,
    /// Glyph drawn at the agent's position.
    pub marker: char,
    /// Interval between idle ticks.
    pub tick_interval: Duration,
    /// Reflect captured text (`my` to `your`, ...) in replies.
    pub reflect: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "HAL9000".to_string(),
            seed: 42,
            start: Position::new(4, 14),
            marker: MARKER,
            tick_interval: Duration::from_secs(1),
            reflect: false,
        }
    }
}

impl AgentConfig {
    /// Set the agent's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting cell.
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Set the map marker glyph.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Set the idle tick interval (at least one millisecond).
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Enable or disable reflection of captured text.
    pub fn with_reflect(mut self, reflect: bool) -> Self {
        self.reflect = reflect;
        self
    }
}
