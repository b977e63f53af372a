//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::Field;

/// Field-level validation error.
///
/// The `Display` text is the message shown next to the offending input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ValidationError {
    /// Name contains something other than ASCII letters and whitespace
    #[error("Name should only contain letters and spaces.")]
    NameFormat,

    /// Name is empty after trimming
    #[error("Name is required.")]
    NameRequired,

    /// Email is not shaped like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    EmailFormat,

    /// Phone is not exactly 11 decimal digits
    #[error("Please enter a valid 11-digit phone number.")]
    PhoneFormat,
}

impl ValidationError {
    /// The field whose error slot this error belongs to.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameFormat | Self::NameRequired => Field::Name,
            Self::EmailFormat => Field::Email,
            Self::PhoneFormat => Field::Phone,
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No record at the given position
    #[error("Record not found at index {0}")]
    RecordNotFound(usize),

    /// A row-level operation was requested while no record is being edited
    #[error("No record is being edited")]
    NotEditing,
}

impl CoreError {
    /// Whether it is expected behavior (stale selection, user input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_) | Self::NotEditing => true,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_copy() {
        assert_eq!(
            ValidationError::NameFormat.to_string(),
            "Name should only contain letters and spaces."
        );
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required.");
        assert_eq!(
            ValidationError::EmailFormat.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::PhoneFormat.to_string(),
            "Please enter a valid 11-digit phone number."
        );
    }

    #[test]
    fn validation_error_maps_to_its_slot() {
        assert_eq!(ValidationError::NameRequired.field(), Field::Name);
        assert_eq!(ValidationError::EmailFormat.field(), Field::Email);
        assert_eq!(ValidationError::PhoneFormat.field(), Field::Phone);
    }

    #[test]
    fn core_error_serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::RecordNotFound(3)).unwrap();
        assert_eq!(json["code"], "RecordNotFound");
        assert_eq!(json["details"], 3);
    }
}
