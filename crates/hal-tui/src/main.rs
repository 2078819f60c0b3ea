//! Standalone HAL9000 chat binary.

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use hal_agent::{AgentConfig, Coordinator};
use tracing_subscriber::EnvFilter;

use hal_tui::app::HalApp;
use hal_tui::log_pane::LogPane;
use hal_tui::plain::{self, ConsoleDisplay};
use hal_tui::speech::LogSpeech;

#[derive(Parser)]
#[command(
    name = "hal9000",
    about = "Chat with HAL9000 and walk it around the deck",
    version
)]
struct Args {
    /// RNG seed for reply selection
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Read lines from stdin and print plain output instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Milliseconds between idle ticks
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Glyph marking HAL's position on the map
    #[arg(long, default_value = "M")]
    marker: char,

    /// Reflect pronouns in echoed text ("my" becomes "your")
    #[arg(long)]
    reflect: bool,

    /// Voice name passed to the speech collaborator
    #[arg(long, default_value = "Victoria")]
    voice: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = AgentConfig::default()
        .with_seed(args.seed)
        .with_marker(args.marker)
        .with_tick_interval(Duration::from_millis(args.tick_ms))
        .with_reflect(args.reflect);
    let speech = LogSpeech::new(args.voice);

    let result = if args.plain {
        run_plain(&config, speech)
    } else {
        run_tui(&config, speech)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_plain(config: &AgentConfig, speech: LogSpeech) -> Result<(), String> {
    let display = ConsoleDisplay::new(io::stdout().lock(), false);
    let mut coordinator = Coordinator::new(config, display, speech).map_err(|e| e.to_string())?;
    plain::run(&mut coordinator, io::stdin().lock())
}

fn run_tui(config: &AgentConfig, speech: LogSpeech) -> Result<(), String> {
    let coordinator =
        Coordinator::new(config, LogPane::new(), speech).map_err(|e| e.to_string())?;
    hal_tui::terminal::run(HalApp::new(coordinator), config.tick_interval)
}
