//! Shared top-bar contents as a pure function of navigation state.

use crate::bridge::ActionId;
use crate::navigation::Destination;

/// A button in the top bar's action area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BarAction {
    Calculate,
    Calendar,
    Save,
}

impl BarAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calculate => "Calculate",
            Self::Calendar => "Calendar",
            Self::Save => "Save",
        }
    }

    /// Letter pressed together with Ctrl to activate the button.
    pub fn hotkey(self) -> char {
        match self {
            Self::Calculate => 'k',
            Self::Calendar => 'd',
            Self::Save => 's',
        }
    }

    /// Id forwarded through the action slot. `None` for buttons with no
    /// operation attached.
    pub fn action_id(self) -> Option<ActionId> {
        match self {
            Self::Save => Some(ActionId::SAVE),
            Self::Calculate | Self::Calendar => None,
        }
    }

    pub fn from_hotkey(ch: char) -> Option<Self> {
        [Self::Calculate, Self::Calendar, Self::Save]
            .into_iter()
            .find(|action| action.hotkey().eq_ignore_ascii_case(&ch))
    }
}

/// Everything the top bar shows for one navigation state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chrome {
    pub title: &'static str,
    pub show_back: bool,
    pub actions: &'static [BarAction],
}

impl Chrome {
    pub fn has_action(&self, action: BarAction) -> bool {
        self.actions.contains(&action)
    }
}

pub fn title_for(destination: Destination) -> &'static str {
    match destination {
        Destination::ScreenA => "Intro",
        Destination::ScreenB => "Intermediate",
        Destination::ScreenC => "Profile",
    }
}

pub fn actions_for(destination: Destination) -> &'static [BarAction] {
    match destination {
        Destination::ScreenA => &[],
        Destination::ScreenB => &[BarAction::Calculate, BarAction::Calendar],
        Destination::ScreenC => &[BarAction::Save],
    }
}

pub fn chrome_for(destination: Destination, depth: usize) -> Chrome {
    Chrome {
        title: title_for(destination),
        show_back: depth > 1,
        actions: actions_for(destination),
    }
}
