use crate::bridge::ActionSlot;
use crate::config::UiConfig;
use crate::navigation::{Destination, NavigationStack};
use crate::profile::{ProfileDraft, ProfileSink};
use crate::ui::chrome::{chrome_for, BarAction, Chrome};
use crate::ui::screens::{build_screen, Screen, ScreenOutcome};
use crossterm::event::KeyEvent;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a footer status stays up.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App {
    should_quit: bool,
    exit_on_root_back: bool,
    show_hints: bool,
    navigation: NavigationStack,
    /// Body for the top of `navigation`; always mounted.
    screen: Box<dyn Screen>,
    action_slot: ActionSlot,
    sink: Arc<dyn ProfileSink>,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: &UiConfig, sink: Arc<dyn ProfileSink>) -> Self {
        let navigation = NavigationStack::default();
        let mut action_slot = ActionSlot::new();
        let mut screen = build_screen(navigation.current(), &sink);
        screen.on_mount(&mut action_slot);
        Self {
            should_quit: false,
            exit_on_root_back: config.exit_on_root_back,
            show_hints: config.show_hints,
            navigation,
            screen,
            action_slot,
            sink,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    pub fn current(&self) -> Destination {
        self.navigation.current()
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn chrome(&self) -> Chrome {
        chrome_for(self.navigation.current(), self.navigation.depth())
    }

    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }

    pub fn action_slot(&self) -> &ActionSlot {
        &self.action_slot
    }

    pub fn draft(&self) -> Option<ProfileDraft> {
        self.screen.draft()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    /// Drop the footer status once it is `STATUS_TTL` old at `now`.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, since)) = &self.status {
            if now.saturating_duration_since(*since) >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Route a key to the mounted screen.
    pub fn on_key(&mut self, key: KeyEvent) {
        if let ScreenOutcome::Navigate(destination) = self.screen.handle_key(key) {
            self.navigate_to(destination);
        }
    }

    /// Push `destination` and mount its screen.
    pub fn navigate_to(&mut self, destination: Destination) {
        let from = self.navigation.current();
        self.navigation.navigate_to(destination);
        self.remount();
        tracing::info!(
            %from,
            to = %destination,
            depth = self.navigation.depth(),
            "navigated forward"
        );
    }

    /// Pop the current destination.
    ///
    /// At the root nothing is popped; the app asks to exit instead when
    /// `exit_on_root_back` is set. Returns whether a screen was popped.
    pub fn navigate_back(&mut self) -> bool {
        let Some(popped) = self.navigation.navigate_back() else {
            tracing::debug!(exit = self.exit_on_root_back, "back pressed at root");
            if self.exit_on_root_back {
                self.request_quit();
            }
            return false;
        };
        self.remount();
        tracing::info!(
            from = %popped,
            to = %self.navigation.current(),
            depth = self.navigation.depth(),
            "navigated back"
        );
        true
    }

    /// Press a top-bar button. Buttons not shown for the current screen do
    /// nothing. Returns whether a handler ran.
    pub fn press_action(&mut self, action: BarAction) -> bool {
        if !self.chrome().has_action(action) {
            return false;
        }
        let Some(id) = action.action_id() else {
            tracing::debug!(action = action.label(), "action has no operation attached");
            return false;
        };
        let handled = self.action_slot.dispatch(id);
        if handled && action == BarAction::Save {
            self.status = Some(("Profile saved".to_string(), Instant::now()));
        }
        handled
    }

    /// Swap the mounted screen for a fresh one matching the stack top.
    ///
    /// The outgoing screen unmounts before the new one mounts, so the action
    /// slot never holds a callback from a screen that is no longer visible.
    fn remount(&mut self) {
        self.screen.on_unmount(&mut self.action_slot);
        self.status = None;
        let mut screen = build_screen(self.navigation.current(), &self.sink);
        screen.on_mount(&mut self.action_slot);
        self.screen = screen;
    }
}
