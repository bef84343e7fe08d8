//! Model-View-Intent primitives for screen-local state.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! Screens translate input into intents; reducers are the only place a
//! screen's state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
