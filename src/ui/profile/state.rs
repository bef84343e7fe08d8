use crate::profile::ProfileDraft;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Address,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Address,
            Self::Address => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: stepping back and forth land on the same one.
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileFormState {
    pub name: String,
    pub address: String,
    pub focused: ProfileField,
}

impl UiState for ProfileFormState {}

impl ProfileFormState {
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Address => &self.address,
        }
    }

    pub fn value_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Address => &mut self.address,
        }
    }

    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }
}
