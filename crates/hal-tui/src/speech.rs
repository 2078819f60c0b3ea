//! Speech collaborator for terminals without a synthesiser.

use hal_agent::Speech;

/// Reports each utterance as a tracing event under the `speech` target.
#[derive(Debug, Clone)]
pub struct LogSpeech {
    voice: String,
}

impl LogSpeech {
    /// Create a speaker with the given voice name.
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            voice: voice.into(),
        }
    }
}

impl Speech for LogSpeech {
    fn speak(&mut self, text: &str) {
        tracing::info!(target: "speech", voice = %self.voice, text, "speak");
    }
}
