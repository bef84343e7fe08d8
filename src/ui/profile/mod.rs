mod intent;
mod reducer;
mod state;

pub use intent::ProfileFormIntent;
pub use reducer::ProfileFormReducer;
pub use state::{ProfileField, ProfileFormState};
