//! Field validators
//!
//! Each validator is a pure function from a candidate value to `Ok(())` or the
//! [`ValidationError`] to store in that field's error slot.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::Field;

#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("name pattern is valid"));

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("phone pattern is valid"));

/// Letters and whitespace only, and not blank.
///
/// The character check runs first: an all-whitespace value passes it and is
/// then reported as [`ValidationError::NameRequired`].
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if !NAME_PATTERN.is_match(value) {
        return Err(ValidationError::NameFormat);
    }
    if value.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// `local@domain.tld` shape, no whitespace. No deliverability check.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

/// Exactly 11 ASCII digits.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::PhoneFormat)
    }
}

/// Run the validator belonging to `field`.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
    }
}
