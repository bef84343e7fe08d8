use crate::ui::chrome::Chrome;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// The shared top bar: back button, title, and the current screen's actions.
pub struct TopBar<'a> {
    chrome: &'a Chrome,
}

impl<'a> TopBar<'a> {
    pub fn new(chrome: &'a Chrome) -> Self {
        Self { chrome }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut left = vec![Span::styled(" ", text_style)];
        if self.chrome.show_back {
            left.push(Span::styled("← Esc", text_style));
            left.push(Span::styled("  │  ", separator_style));
        }
        left.push(Span::styled(self.chrome.title, title_style));

        let mut right = Vec::new();
        for action in self.chrome.actions {
            right.push(Span::styled(
                format!("^{} ", action.hotkey().to_ascii_uppercase()),
                separator_style,
            ));
            right.push(Span::styled(action.label(), text_style));
            right.push(Span::styled("  ", text_style));
        }

        let used: usize = left
            .iter()
            .chain(right.iter())
            .map(|span| span.content.chars().count())
            .sum();
        let padding = (area.width as usize).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.extend(right);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
