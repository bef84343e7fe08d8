/// Marker trait for a discrete user action a reducer understands.
pub trait Intent: Send + 'static {}
