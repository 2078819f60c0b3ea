//! Wires an [`Agent`] to its display and speech collaborators.

use crate::agent::{Agent, Effect};
use crate::collaborator::{Display, LineStyle, Speech};
use crate::config::AgentConfig;
use crate::error::AgentResult;

/// Whether the hosting loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep accepting input.
    Continue,
    /// The operator asked to quit.
    Quit,
}

/// Owns one agent plus one display and one speech collaborator.
///
/// All state lives here; the hosting loop creates a coordinator, feeds it
/// lines and ticks, and drops it on shutdown.
pub struct Coordinator<D, S> {
    agent: Agent,
    name: String,
    display: D,
    speech: S,
}

impl<D: Display, S: Speech> Coordinator<D, S> {
    /// Build an agent from `config` and attach the collaborators.
    pub fn new(config: &AgentConfig, display: D, speech: S) -> AgentResult<Self> {
        Ok(Self::with_agent(
            Agent::new(config)?,
            config.name.clone(),
            display,
            speech,
        ))
    }

    /// Attach collaborators to an existing agent.
    pub fn with_agent(agent: Agent, name: String, display: D, speech: S) -> Self {
        Self {
            agent,
            name,
            display,
            speech,
        }
    }

    /// Show the session greeting.
    pub fn start(&mut self) {
        self.display
            .log("Operator started the chat.", LineStyle::System);
        self.display
            .log(&format!("{} joined.", self.name), LineStyle::Presence);
    }

    /// Echo and handle one line of operator input.
    pub fn handle(&mut self, line: &str) -> Control {
        self.display.log(line, LineStyle::Operator);
        let effects = self.agent.handle(line);
        self.apply(effects)
    }

    /// Run the agent's idle hook.
    pub fn tick(&mut self) {
        self.agent.update();
    }

    /// The agent.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// The display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The display collaborator, mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The speech collaborator.
    pub fn speech(&self) -> &S {
        &self.speech
    }

    /// Deliver effects in order.
    pub fn apply(&mut self, effects: Vec<Effect>) -> Control {
        let mut control = Control::Continue;
        for effect in effects {
            match effect {
                Effect::Say(text) => {
                    self.display.say(&text);
                    self.speech.speak(&text);
                }
                Effect::Log { text, style } => self.display.log(&text, style),
                Effect::Render(rows) => {
                    for row in &rows {
                        self.display.log(row, LineStyle::Map);
                    }
                }
                Effect::Quit => control = Control::Quit,
            }
        }
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::UNKNOWN_COMMAND_REPLY;
    use crate::collaborator::{RecordedSpeech, SilentSpeech, Transcript};

    fn coordinator() -> Coordinator<Transcript, RecordedSpeech> {
        Coordinator::new(
            &AgentConfig::default(),
            Transcript::new(),
            RecordedSpeech::default(),
        )
        .unwrap()
    }

    #[test]
    fn greeting() {
        let mut c = coordinator();
        c.start();
        assert_eq!(
            c.display().lines(),
            &[
                (LineStyle::System, "Operator started the chat.".to_string()),
                (LineStyle::Presence, "HAL9000 joined.".to_string()),
            ]
        );
    }

    #[test]
    fn say_reaches_display_and_speech() {
        let mut c = coordinator();
        assert_eq!(c.handle("/nonsense"), Control::Continue);
        assert_eq!(c.display().texts(LineStyle::Operator), vec!["/nonsense"]);
        assert_eq!(
            c.display().texts(LineStyle::Error),
            vec!["Command `nonsense` unknown."]
        );
        assert_eq!(
            c.display().texts(LineStyle::Agent),
            vec![format!("\u{2014} {UNKNOWN_COMMAND_REPLY}").as_str()]
        );
        assert_eq!(c.speech().spoken(), &[UNKNOWN_COMMAND_REPLY.to_string()]);
    }

    #[test]
    fn render_logs_map_rows() {
        let mut c = coordinator();
        c.handle("map");
        assert_eq!(c.display().texts(LineStyle::Map).len(), 12);
        assert!(c.speech().spoken().is_empty());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut c = coordinator();
        assert_eq!(c.handle("/quit"), Control::Quit);
    }

    #[test]
    fn tick_changes_nothing() {
        let mut c = coordinator();
        let before = c.agent().navigator().current_position();
        c.tick();
        c.tick();
        assert!(c.display().lines().is_empty());
        assert_eq!(c.agent().navigator().current_position(), before);
    }

    #[test]
    fn blocked_move_does_not_render() {
        let mut c = coordinator();
        c.handle("/move up");
        assert!(c.display().texts(LineStyle::Map).is_empty());
        assert_eq!(c.speech().spoken().len(), 1);
    }

    #[test]
    fn runs_headless_with_silent_speech() {
        let mut c = Coordinator::new(&AgentConfig::default(), Transcript::new(), SilentSpeech)
            .unwrap();
        assert_eq!(c.handle("are you awake?"), Control::Continue);
        assert_eq!(c.display().texts(LineStyle::Agent).len(), 1);
    }
}
