//! Scrolling chat log: the display collaborator for the full-screen UI.

use hal_agent::{Align, Display, LineStyle};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// A single line of output in the chat log.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// Visual style of this line.
    pub style: LineStyle,
    /// The text content.
    pub text: String,
}

/// Chat log state: recorded lines plus a scroll offset from the bottom.
#[derive(Debug, Default)]
pub struct LogPane {
    lines: Vec<LogLine>,
    scroll: u16,
}

impl LogPane {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines, oldest first.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Scroll one line towards older output.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll one line towards newer output.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Draw the log into `area`, pinned to the newest line unless scrolled.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.lines.iter().map(styled_line).collect();

        let inner_width = area.width.saturating_sub(2) as usize;
        let total_wrapped: u16 = lines
            .iter()
            .map(|l| {
                if inner_width == 0 {
                    1
                } else {
                    l.width().max(1).div_ceil(inner_width) as u16
                }
            })
            .sum();

        let visible_height = area.height.saturating_sub(2);
        let max_scroll = total_wrapped.saturating_sub(visible_height);
        let scroll = max_scroll.saturating_sub(self.scroll);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" HAL9000 ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(paragraph, area);
    }
}

impl Display for LogPane {
    fn log(&mut self, text: &str, style: LineStyle) {
        self.lines.push(LogLine {
            style,
            text: text.to_string(),
        });
        self.scroll = 0;
    }
}

fn styled_line(line: &LogLine) -> Line<'static> {
    let style = match line.style {
        LineStyle::Operator => Style::default().fg(Color::White),
        LineStyle::Agent => Style::default().fg(Color::Green),
        LineStyle::Error => Style::default().fg(Color::Red),
        LineStyle::System | LineStyle::Presence => Style::default().fg(Color::DarkGray),
        LineStyle::Map => Style::default().fg(Color::Cyan),
    };
    let alignment = match line.style.align() {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
    };
    Line::from(Span::styled(line.text.clone(), style)).alignment(alignment)
}
