use crate::navigation::Destination;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::screens::{Screen, ScreenOutcome};
use crate::ui::theme::{BUTTON_BG, FOCUS_BORDER, HEADER_TEXT};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const BUTTON_LABEL: &str = "Next";

/// A screen whose only content is a centered "Next" button.
pub struct ForwardScreen {
    next: Destination,
}

impl ForwardScreen {
    pub fn new(next: Destination) -> Self {
        Self { next }
    }
}

impl Screen for ForwardScreen {
    fn handle_key(&mut self, key: KeyEvent) -> ScreenOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ScreenOutcome::Navigate(self.next),
            _ => ScreenOutcome::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let width = BUTTON_LABEL.chars().count() as u16 + 8;
        let button = centered_rect_by_size(area, width, 3);
        let widget = Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(BUTTON_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(FOCUS_BORDER)),
            );
        frame.render_widget(widget, button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn enter_navigates_to_next() {
        let mut screen = ForwardScreen::new(Destination::ScreenB);
        let outcome = screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(outcome, ScreenOutcome::Navigate(Destination::ScreenB));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut screen = ForwardScreen::new(Destination::ScreenC);
        let outcome = screen.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(outcome, ScreenOutcome::Ignored);
    }
}
