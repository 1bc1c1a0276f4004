use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use somnia_core::models::contact::{ContactField, ContactInfo};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

/// Optional leading +, at least ten digits, common separators allowed
/// anywhere between them.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?(?:[\s().-]*[0-9]){10,}[\s().-]*$").unwrap());

/// A syntactic problem with one contact field. Non-fatal: the front end
/// shows these inline on field exit, and they never block other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldError {
    #[error("this field is required")]
    EmptyField,
    #[error("too short")]
    TooShort,
    #[error("contains invalid characters")]
    InvalidCharacters,
    #[error("invalid format")]
    InvalidFormat,
}

/// A field error paired with the field it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactFieldError {
    pub field: ContactField,
    pub error: FieldError,
}

/// Letters and spaces only, at least two characters.
pub fn validate_name(input: &str) -> Result<(), FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if trimmed.chars().count() < 2 {
        return Err(FieldError::TooShort);
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(FieldError::InvalidCharacters);
    }
    Ok(())
}

/// Case-insensitive `local@domain.tld` shape.
pub fn validate_email(input: &str) -> Result<(), FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// International-or-US phone shape with at least ten digits.
pub fn validate_phone(input: &str) -> Result<(), FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if trimmed.chars().count() < 10 {
        return Err(FieldError::TooShort);
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// Validate all three contact fields, collecting every failure.
pub fn validate_contact(info: &ContactInfo) -> Vec<ContactFieldError> {
    let checks = [
        (ContactField::FullName, validate_name(&info.full_name)),
        (ContactField::Email, validate_email(&info.email)),
        (ContactField::Phone, validate_phone(&info.phone)),
    ];

    checks
        .into_iter()
        .filter_map(|(field, outcome)| outcome.err().map(|error| ContactFieldError { field, error }))
        .collect()
}
