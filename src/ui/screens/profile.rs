use crate::bridge::{ActionId, ActionSlot};
use crate::profile::{ProfileDraft, ProfileSink};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileField, ProfileFormIntent, ProfileFormReducer, ProfileFormState};
use crate::ui::screens::{Screen, ScreenOutcome};
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

const FIELDS: [ProfileField; 2] = [ProfileField::Name, ProfileField::Address];

/// Name and address form. The form state is shared with the save callback
/// it registers, so the top bar's save button sees the latest values.
pub struct ProfileScreen {
    form: Arc<Mutex<ProfileFormState>>,
    sink: Arc<dyn ProfileSink>,
}

impl ProfileScreen {
    pub fn new(sink: Arc<dyn ProfileSink>) -> Self {
        Self {
            form: Arc::new(Mutex::new(ProfileFormState::default())),
            sink,
        }
    }

    fn dispatch(&self, intent: ProfileFormIntent) {
        let mut form = self.form.lock();
        *form = ProfileFormReducer::reduce(std::mem::take(&mut *form), intent);
    }
}

impl Screen for ProfileScreen {
    fn on_mount(&mut self, slot: &mut ActionSlot) {
        let form = Arc::clone(&self.form);
        let sink = Arc::clone(&self.sink);
        slot.register(move |id| {
            if id == ActionId::SAVE {
                let draft = form.lock().draft();
                sink.save(&draft.name, &draft.address);
            }
        });
    }

    fn on_unmount(&mut self, slot: &mut ActionSlot) {
        slot.unregister();
        *self.form.lock() = ProfileFormState::default();
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenOutcome {
        let intent = match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => ProfileFormIntent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => ProfileFormIntent::FocusPrev,
            KeyCode::Backspace => ProfileFormIntent::Backspace,
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                ProfileFormIntent::Input(ch)
            }
            _ => return ScreenOutcome::Ignored,
        };
        self.dispatch(intent);
        ScreenOutcome::Handled
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let form = self.form.lock().clone();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        for (field, rect) in FIELDS.into_iter().zip([rows[0], rows[2]]) {
            let focused = form.focused == field;
            let (border, title) = if focused {
                (FOCUS_BORDER, Style::default().fg(ACCENT))
            } else {
                (GLOBAL_BORDER, Style::default().fg(HEADER_TEXT))
            };
            let value = form.value(field);
            let (scroll, cursor) = field_viewport(value, rect.width.saturating_sub(2));
            let widget = Paragraph::new(value.to_string())
                .style(Style::default().fg(HEADER_TEXT))
                .scroll((0, scroll))
                .block(
                    Block::default()
                        .title(Span::styled(field.label(), title))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                );
            frame.render_widget(widget, rect);

            if focused && rect.width > 2 && rect.height > 2 {
                frame.set_cursor_position((rect.x + 1 + cursor, rect.y + 1));
            }
        }
    }

    fn draft(&self) -> Option<ProfileDraft> {
        Some(self.form.lock().draft())
    }
}

/// Horizontal scroll and cursor column for `value` in a field that is
/// `inner_width` cells wide. The end of the text and the cursor after it
/// always stay in view.
fn field_viewport(value: &str, inner_width: u16) -> (u16, u16) {
    let width = value.width();
    let visible = usize::from(inner_width.max(1));
    let scroll = (width + 1).saturating_sub(visible);
    let cursor = width - scroll;
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(cursor).unwrap_or(inner_width),
    )
}
