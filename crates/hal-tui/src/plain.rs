//! Line-oriented console mode.
//!
//! Reads operator lines from any reader and prints the conversation with
//! colours. Used with `--plain`, for piping, and in integration tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use hal_agent::{Align, Control, Coordinator, Display, LineStyle};

use crate::speech::LogSpeech;

/// Column width used to right-align agent lines.
const WIDTH: usize = 72;

/// A display that writes coloured lines to a writer.
pub struct ConsoleDisplay<W> {
    out: W,
    echo: bool,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Write to `out`. With `echo` off, operator lines are not repeated
    /// (a terminal has already shown them as they were typed).
    pub fn new(out: W, echo: bool) -> Self {
        Self { out, echo }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn log(&mut self, text: &str, style: LineStyle) {
        if style == LineStyle::Operator && !self.echo {
            return;
        }
        let padded = match style.align() {
            Align::Left => text.to_string(),
            Align::Right => format!("{text:>WIDTH$}"),
        };
        let padded = padded.as_str();
        let painted = match style {
            LineStyle::Agent => padded.green(),
            LineStyle::Error => padded.red(),
            LineStyle::System | LineStyle::Presence => padded.bright_black(),
            LineStyle::Operator | LineStyle::Map => padded.normal(),
        };
        if let Err(e) = writeln!(self.out, "{painted}") {
            tracing::warn!(error = %e, "console write failed");
        }
    }
}

/// Feed every line of `input` to the coordinator until EOF or `/quit`.
pub fn run<R, W>(
    coordinator: &mut Coordinator<ConsoleDisplay<W>, LogSpeech>,
    input: R,
) -> Result<(), String>
where
    R: BufRead,
    W: Write,
{
    coordinator.start();
    for line in input.lines() {
        let line = line.map_err(|e| format!("input error: {e}"))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if coordinator.handle(line) == Control::Quit {
            tracing::debug!("operator quit");
            break;
        }
    }
    Ok(())
}
