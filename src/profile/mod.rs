//! Profile data and the view-model that receives saves.

mod view_model;

pub use view_model::{Profile, ProfileViewModel};

/// Transient form contents. Lives only while the profile screen is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub address: String,
}

/// Receiver for profile saves.
///
/// The caller does not wait for or inspect any result; a save is
/// fire-and-forget.
pub trait ProfileSink: Send + Sync {
    fn save(&self, name: &str, address: &str);
}
