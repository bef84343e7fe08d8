use crate::ui::app::App;
use crate::ui::chrome::BarAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Top-level key routing: global keys, then the top bar, then the screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Esc {
        app.navigate_back();
        return;
    }

    if let KeyCode::Char(ch) = key.code {
        if is_ctrl_char(key, ch) {
            if let Some(action) = BarAction::from_hotkey(ch) {
                app.press_action(action);
            }
            return;
        }
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
