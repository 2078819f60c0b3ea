//! Display and speech capabilities.
//!
//! The agent never draws or speaks itself; a [`Coordinator`](crate::Coordinator)
//! hands its output to one implementation of each trait.

/// Horizontal placement hint for a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush left.
    Left,
    /// Flush right.
    Right,
}

/// What kind of line is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Text typed by the operator.
    Operator,
    /// Something the agent says.
    Agent,
    /// An error annotation, such as an unknown command.
    Error,
    /// Session notice on the operator's side.
    System,
    /// Session notice on the agent's side.
    Presence,
    /// A row of the deck map; render monospaced.
    Map,
}

impl LineStyle {
    /// Which side of the log the line belongs on.
    pub fn align(self) -> Align {
        match self {
            Self::Agent | Self::Presence => Align::Right,
            Self::Operator | Self::Error | Self::System | Self::Map => Align::Left,
        }
    }
}

/// Somewhere to show lines of text.
pub trait Display {
    /// Show one line.
    fn log(&mut self, text: &str, style: LineStyle);

    /// Show something the agent says.
    fn say(&mut self, text: &str) {
        self.log(&format!("\u{2014} {text}"), LineStyle::Agent);
    }
}

/// Something that can vocalise text.
pub trait Speech {
    /// Speak `text`.
    fn speak(&mut self, text: &str);
}

/// A display that records every line, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<(LineStyle, String)>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines with their styles.
    pub fn lines(&self) -> &[(LineStyle, String)] {
        &self.lines
    }

    /// Recorded text of a given style.
    pub fn texts(&self, style: LineStyle) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == style)
            .map(|(_, t)| t.as_str())
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Display for Transcript {
    fn log(&mut self, text: &str, style: LineStyle) {
        self.lines.push((style, text.to_string()));
    }
}

/// Speech that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl Speech for SilentSpeech {
    fn speak(&mut self, text: &str) {
        tracing::trace!(text, "speech muted");
    }
}

/// Speech that remembers what it was asked to say.
#[derive(Debug, Clone, Default)]
pub struct RecordedSpeech {
    spoken: Vec<String>,
}

impl RecordedSpeech {
    /// Everything spoken so far, oldest first.
    pub fn spoken(&self) -> &[String] {
        &self.spoken
    }
}

impl Speech for RecordedSpeech {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}
