/// Marker trait for renderable screen state.
///
/// `Default` doubles as the freshly-mounted state, which lets callers move
/// the old value out with `std::mem::take` before reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
