use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFormIntent {
    /// Append a character to the focused field.
    Input(char),
    /// Remove the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrev,
}

impl Intent for ProfileFormIntent {}
