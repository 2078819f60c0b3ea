//! The HAL9000 agent.

use hal_chat::{Reflections, ResponseEngine, hal_rules};
use hal_deck::{DeckMap, Direction, Navigator};

use crate::collaborator::LineStyle;
use crate::command::{Command, Input};
use crate::config::AgentConfig;
use crate::error::AgentResult;

/// Reply given to any unrecognised command.
pub const UNKNOWN_COMMAND_REPLY: &str = "I'm afraid you can't do that.";

/// Conversational input that shows the map instead of chatting.
const MAP_REQUEST: &str = "map";

/// Something the agent wants shown, said, or done.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show and speak a reply.
    Say(String),
    /// Show an annotation line.
    Log {
        /// The line text.
        text: String,
        /// How to show it.
        style: LineStyle,
    },
    /// Show the deck, one line per row.
    Render(Vec<String>),
    /// Shut the application down.
    Quit,
}

/// Owns the response engine and the navigator, and turns input into effects.
pub struct Agent {
    engine: ResponseEngine,
    navigator: Navigator,
}

impl Agent {
    /// Build HAL on the reference deck.
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let mut rules = hal_rules()?;
        if config.reflect {
            rules = rules.with_reflections(Reflections::english());
        }
        let engine = ResponseEngine::seeded(rules, config.seed);
        let navigator =
            Navigator::new(DeckMap::reference(), config.start)?.with_marker(config.marker);
        Ok(Self::from_parts(engine, navigator))
    }

    /// Assemble an agent from an existing engine and navigator.
    pub fn from_parts(engine: ResponseEngine, navigator: Navigator) -> Self {
        Self { engine, navigator }
    }

    /// The navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Handle one line of operator input.
    pub fn handle(&mut self, line: &str) -> Vec<Effect> {
        match Input::classify(line) {
            Input::Chat(text) => self.on_input(text),
            Input::Command(command) => self.on_command(command),
        }
    }

    /// Handle conversational input.
    pub fn on_input(&mut self, text: &str) -> Vec<Effect> {
        if text.trim().eq_ignore_ascii_case(MAP_REQUEST) {
            return vec![Effect::Render(self.navigator.render())];
        }
        vec![Effect::Say(self.engine.respond(text))]
    }

    /// Handle a parsed command.
    pub fn on_command(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Quit => vec![Effect::Quit],
            Command::Move {
                direction: Some(direction),
            } => self.try_step(direction),
            Command::Move { direction: None } => {
                tracing::debug!("move without a known direction ignored");
                Vec::new()
            }
            Command::Unknown { input } => {
                tracing::warn!(command = %input, "unknown command");
                vec![
                    Effect::Log {
                        text: format!("Command `{input}` unknown."),
                        style: LineStyle::Error,
                    },
                    Effect::Say(UNKNOWN_COMMAND_REPLY.to_string()),
                ]
            }
        }
    }

    /// Idle hook, called once per tick. Does no work.
    pub fn update(&mut self) {
        tracing::trace!("tick");
    }

    fn try_step(&mut self, direction: Direction) -> Vec<Effect> {
        let report = self.navigator.step(direction);
        tracing::debug!(direction = direction.name(), outcome = ?report.outcome, "step");
        let mut effects = Vec::with_capacity(2);
        if report.outcome.rerenders() {
            effects.push(Effect::Render(self.navigator.render()));
        }
        effects.push(Effect::Say(report.message()));
        effects
    }
}
