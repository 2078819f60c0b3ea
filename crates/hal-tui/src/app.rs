//! Full-screen chat application state.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use hal_agent::{Control, Coordinator};

use crate::log_pane::LogPane;
use crate::speech::LogSpeech;

/// The chat window: a coordinator whose display is the log pane, plus the
/// operator's input line.
pub struct HalApp {
    coordinator: Coordinator<LogPane, LogSpeech>,
    input_text: String,
    input_cursor: usize,
    /// Set once the operator quits.
    pub should_quit: bool,
}

impl HalApp {
    /// Wrap a coordinator and show its greeting.
    pub fn new(mut coordinator: Coordinator<LogPane, LogSpeech>) -> Self {
        coordinator.start();
        Self {
            coordinator,
            input_text: String::new(),
            input_cursor: 0,
            should_quit: false,
        }
    }

    /// The coordinator.
    pub fn coordinator(&self) -> &Coordinator<LogPane, LogSpeech> {
        &self.coordinator
    }

    /// Run the agent's idle hook.
    pub fn tick(&mut self) {
        self.coordinator.tick();
    }

    fn submit_input(&mut self) {
        let input = self.input_text.trim().to_string();
        if input.is_empty() {
            return;
        }
        self.input_text.clear();
        self.input_cursor = 0;

        if self.coordinator.handle(&input) == Control::Quit {
            self.should_quit = true;
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_text.clear();
                self.input_cursor = 0;
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => self.input_cursor = self.prev_boundary(),
            KeyCode::Right => {
                self.input_cursor = self.input_text[self.input_cursor..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| self.input_cursor + i)
                    .unwrap_or(self.input_text.len());
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Up => self.coordinator.display_mut().scroll_up(),
            KeyCode::Down => self.coordinator.display_mut().scroll_down(),
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    /// Handle mouse scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.coordinator.display_mut().scroll_up(),
            MouseEventKind::ScrollDown => self.coordinator.display_mut().scroll_down(),
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input_text[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Draw the log and the input line.
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Log
                Constraint::Length(3), // Input
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.coordinator.display().draw(frame, chunks[0]);

        let input = Paragraph::new(format!("> {}", self.input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(input, chunks[1]);

        let typed = self.input_text[..self.input_cursor].chars().count() as u16;
        let cursor_x = chunks[1].x.saturating_add(3).saturating_add(typed);
        let cursor_y = chunks[1].y + 1;
        if cursor_x < (chunks[1].x + chunks[1].width).saturating_sub(1) {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }

        let status = Paragraph::new(
            "Enter:send  /move up|down|left|right  map  /quit  \u{2191}\u{2193}:scroll  Ctrl+C:quit",
        )
        .style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use hal_agent::{AgentConfig, LineStyle};
    use ratatui::backend::TestBackend;

    fn app() -> HalApp {
        let coordinator =
            Coordinator::new(&AgentConfig::default(), LogPane::new(), LogSpeech::new("Victoria"))
                .unwrap();
        HalApp::new(coordinator)
    }

    fn type_line(app: &mut HalApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn greets_on_start() {
        let app = app();
        assert_eq!(app.coordinator().display().lines().len(), 2);
    }

    #[test]
    fn typed_line_is_handled() {
        let mut app = app();
        type_line(&mut app, "map");
        let maps = app
            .coordinator()
            .display()
            .lines()
            .iter()
            .filter(|l| l.style == LineStyle::Map)
            .count();
        assert_eq!(maps, 12);
        assert!(app.input_text.is_empty());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        type_line(&mut app, "/quit");
        assert!(app.should_quit);
    }

    #[test]
    fn backspace_handles_multibyte() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(app.input_text.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn draws_on_a_normal_terminal() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let status: String = (0..80).map(|x| buffer[(x, 23)].symbol()).collect();
        assert!(status.starts_with("Enter:send"));
    }

    #[test]
    fn draws_on_a_zero_width_terminal() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        let mut terminal = Terminal::new(TestBackend::new(0, 10)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
