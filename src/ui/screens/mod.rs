//! Screen bodies rendered between the top bar and the footer.

mod forward;
mod profile;

pub use forward::ForwardScreen;
pub use profile::ProfileScreen;

use crate::bridge::ActionSlot;
use crate::navigation::Destination;
use crate::profile::{ProfileDraft, ProfileSink};
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;

/// What a screen wants after handling a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenOutcome {
    /// Key was not for this screen.
    Ignored,
    Handled,
    Navigate(Destination),
}

/// A mounted screen body.
///
/// Exactly one screen is mounted at a time: the top of the navigation
/// stack. `on_mount` runs before it becomes visible and `on_unmount` runs
/// before the next screen mounts, so anything registered in the action
/// slot never outlives its screen.
pub trait Screen: Send {
    fn on_mount(&mut self, _slot: &mut ActionSlot) {}

    fn on_unmount(&mut self, _slot: &mut ActionSlot) {}

    fn handle_key(&mut self, key: KeyEvent) -> ScreenOutcome;

    fn render(&self, frame: &mut Frame<'_>, area: Rect);

    /// Current form contents, for screens that own one.
    fn draft(&self) -> Option<ProfileDraft> {
        None
    }
}

/// Build a fresh, unmounted screen for `destination`.
pub fn build_screen(destination: Destination, sink: &Arc<dyn ProfileSink>) -> Box<dyn Screen> {
    match destination.next() {
        Some(next) => Box::new(ForwardScreen::new(next)),
        None => Box::new(ProfileScreen::new(Arc::clone(sink))),
    }
}
