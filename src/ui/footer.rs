use crate::navigation::Destination;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    destination: Destination,
    status: Option<&'a str>,
    show_hints: bool,
}

impl<'a> Footer<'a> {
    pub fn new(destination: Destination, status: Option<&'a str>, show_hints: bool) -> Self {
        Self {
            destination,
            status,
            show_hints,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match self.status {
            Some(status) => (format!(" {}", status), Style::default().fg(STATUS_OK)),
            None if self.show_hints => (hints_for(self.destination).to_string(), text_style),
            None => (String::new(), text_style),
        };

        // Char count, not bytes: the separators are multi-byte.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(destination: Destination) -> &'static str {
    match destination {
        Destination::ScreenA => " Enter: Next │ Ctrl+Q: Quit",
        Destination::ScreenB => " Enter: Next │ Esc: Back │ Ctrl+Q: Quit",
        Destination::ScreenC => " Tab: Next field │ Ctrl+S: Save │ Esc: Back │ Ctrl+Q: Quit",
    }
}
