//! Field validation rules

use super::field::{FieldKind, FormField};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// Applied after whitespace has been stripped, so spaces are not listed as separators
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\d{3}\)?[-.]?\d{3}[-.]?\d{4}$").expect("phone pattern compiles")
});

/// Minimum length of the free-text message
pub const MIN_MESSAGE_LEN: usize = 10;

/// Why a field is invalid. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Please enter at least 10 characters.")]
    MessageTooShort,
}

/// Check a raw value against the rule for its kind
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Telephone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        FieldKind::Message if value.chars().count() < MIN_MESSAGE_LEN => {
            Err(FieldError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

/// Validate a field without touching its annotation
pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    validate_value(field.kind, field.required, &field.value)
}

/// Validate a field and set or clear its annotation.
/// Returns whether the field is valid.
pub fn validate_and_annotate(field: &mut FormField) -> bool {
    match validate_field(field) {
        Ok(()) => {
            field.error = None;
            true
        }
        Err(err) => {
            tracing::debug!(field = field.name, reason = %err, "field invalid");
            field.error = Some(err);
            false
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}
