//! Single-slot action registration between the shared top bar and the
//! visible screen.
//!
//! The top bar is drawn outside any screen, so it cannot reach a screen's
//! local state directly. A screen that owns an action registers a callback
//! here when it is mounted and clears it when it is unmounted; the bar only
//! ever talks to whatever is in the slot.

use std::fmt;

/// Identifier passed to the registered callback.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ActionId(pub u32);

impl ActionId {
    pub const SAVE: ActionId = ActionId(100);
}

pub type ActionCallback = Box<dyn FnMut(ActionId) + Send>;

#[derive(Default)]
pub struct ActionSlot {
    callback: Option<ActionCallback>,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, replacing any previous registrant.
    pub fn register<F>(&mut self, callback: F)
    where
        F: FnMut(ActionId) + Send + 'static,
    {
        if self.callback.is_some() {
            tracing::debug!("replacing registered action callback");
        }
        self.callback = Some(Box::new(callback));
        tracing::debug!("action callback registered");
    }

    pub fn unregister(&mut self) {
        if self.callback.take().is_some() {
            tracing::debug!("action callback unregistered");
        }
    }

    pub fn is_registered(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the registered callback with `id`.
    ///
    /// Returns `false` when the slot is empty and nothing ran.
    pub fn dispatch(&mut self, id: ActionId) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(id);
                true
            }
            None => {
                tracing::debug!(action = id.0, "no action callback registered");
                false
            }
        }
    }
}

impl fmt::Debug for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn empty_slot_dispatch_is_inert() {
        let mut slot = ActionSlot::new();
        assert!(!slot.is_registered());
        assert!(!slot.dispatch(ActionId::SAVE));
    }

    #[test]
    fn register_then_unregister_leaves_slot_empty() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut slot = ActionSlot::new();
        slot.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(slot.is_registered());

        slot.unregister();
        assert!(!slot.is_registered());
        assert!(!slot.dispatch(ActionId::SAVE));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dispatch_passes_action_id() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut slot = ActionSlot::new();
        slot.register(move |id| sink.lock().push(id));

        assert!(slot.dispatch(ActionId::SAVE));
        assert_eq!(*seen.lock(), vec![ActionId::SAVE]);
    }

    #[test]
    fn last_writer_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut slot = ActionSlot::new();

        let counter = Arc::clone(&first);
        slot.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        slot.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        slot.dispatch(ActionId::SAVE);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
