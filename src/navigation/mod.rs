//! Destinations and the back-stack that decides which screen is visible.

mod destination;
mod stack;

pub use destination::Destination;
pub use stack::NavigationStack;
