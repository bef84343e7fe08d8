use parking_lot::Mutex;

use crate::profile::ProfileSink;

/// A profile as last handed to the view-model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Default)]
struct Saved {
    last: Option<Profile>,
    count: usize,
}

/// In-memory view-model. Nothing is written anywhere; the latest profile is
/// kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ProfileViewModel {
    saved: Mutex<Saved>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_saved(&self) -> Option<Profile> {
        self.saved.lock().last.clone()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().count
    }
}

impl ProfileSink for ProfileViewModel {
    fn save(&self, name: &str, address: &str) {
        let mut saved = self.saved.lock();
        saved.count += 1;
        saved.last = Some(Profile {
            name: name.to_string(),
            address: address.to_string(),
        });
        tracing::info!(
            name_len = name.chars().count(),
            address_len = address.chars().count(),
            saves = saved.count,
            "profile saved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let vm = ProfileViewModel::new();
        assert_eq!(vm.last_saved(), None);
        assert_eq!(vm.save_count(), 0);
    }

    #[test]
    fn keeps_latest_save() {
        let vm = ProfileViewModel::new();
        vm.save("Jane", "1 Main St");
        vm.save("John", "");

        assert_eq!(vm.save_count(), 2);
        assert_eq!(
            vm.last_saved(),
            Some(Profile {
                name: "John".to_string(),
                address: String::new(),
            })
        );
    }
}
