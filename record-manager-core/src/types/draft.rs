//! Draft form state: the in-progress values and their error slots

use serde::{Deserialize, Serialize};

use super::{Gender, Record};
use crate::error::ValidationError;

/// A validated text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Get all validated fields in form order
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Phone]
    }

    /// Label shown in front of the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
        }
    }
}

/// What `submit` does when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitPolicy {
    /// Raise the "Missing Values" alert, then write the record anyway
    #[default]
    AlertAndProceed,
    /// Raise the alert and leave the record store untouched
    BlockOnErrors,
}

impl SubmitPolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::AlertAndProceed => "Alert and proceed",
            Self::BlockOnErrors => "Block on errors",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::AlertAndProceed => Self::BlockOnErrors,
            Self::BlockOnErrors => Self::AlertAndProceed,
        }
    }

    /// Only two options, so `prev` and `next` are the same
    #[must_use]
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Page-level draft values used to create (or update) a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
}

impl DraftFields {
    /// Value of a text field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Mutable value of a text field
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }

    /// Back to `("", "", "", male)`
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record built from the draft exactly as typed
    pub fn to_record(&self) -> Record {
        Record::new(&self.name, &self.email, &self.phone, self.gender)
    }
}

/// One optional error per validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub phone: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
        }
    }

    /// Store a validator result in the slot of `field`
    pub fn set(&mut self, field: Field, result: Result<(), ValidationError>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = result.err();
    }

    /// Whether any slot holds a message
    pub fn has_any(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some()
    }
}
