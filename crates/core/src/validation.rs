//! Field validation for subjects and trainers.
//!
//! Every function trims its input first and returns the normalized value
//! that should be persisted. Optional fields normalize empty strings to
//! `None` so that blank values never collide with unique constraints.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a subject name.
pub const SUBJECT_NAME_MAX_LEN: usize = 100;

/// Minimum length of a trainer name (after trimming).
pub const TRAINER_NAME_MIN_LEN: usize = 2;

/// Maximum length of a trainer name.
pub const TRAINER_NAME_MAX_LEN: usize = 100;

/// Maximum length of a trainer email address.
pub const EMAIL_MAX_LEN: usize = 100;

/// Exact digit count required when a phone number is changed on update.
pub const UPDATE_PHONE_DIGITS: usize = 10;

/// Phone numbers accepted at creation time: 10 to 15 ASCII digits.
static CREATE_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{10,15}$").expect("phone pattern is a valid regex")
});

fn invalid(msg: impl Into<String>) -> CoreError {
    CoreError::Validation(msg.into())
}

/// Trim an optional free-text value, mapping blank input to `None`.
pub fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// Validate the name of a new subject.
pub fn validate_subject_name(raw: Option<&str>) -> Result<String, CoreError> {
    let name = raw.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(invalid("Subject name is required"));
    }
    if name.chars().count() > SUBJECT_NAME_MAX_LEN {
        return Err(invalid(format!(
            "Subject name cannot exceed {SUBJECT_NAME_MAX_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

// ---------------------------------------------------------------------------
// Trainer
// ---------------------------------------------------------------------------

/// Validate a trainer name, used for both create and update.
pub fn validate_trainer_name(raw: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len < TRAINER_NAME_MIN_LEN {
        return Err(invalid(format!(
            "Trainer name must be at least {TRAINER_NAME_MIN_LEN} characters"
        )));
    }
    if len > TRAINER_NAME_MAX_LEN {
        return Err(invalid(format!(
            "Trainer name cannot exceed {TRAINER_NAME_MAX_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Validate an email address. Blank input means "no email".
pub fn validate_email(raw: &str) -> Result<Option<String>, CoreError> {
    let email = raw.trim();
    if email.is_empty() {
        return Ok(None);
    }
    if email.chars().count() > EMAIL_MAX_LEN || !email.validate_email() {
        return Err(invalid("Enter a valid email address"));
    }
    Ok(Some(email.to_string()))
}

/// Validate a phone number supplied when creating a trainer.
///
/// Blank input means "no phone"; otherwise 10 to 15 digits are required.
pub fn validate_phone_on_create(raw: &str) -> Result<Option<String>, CoreError> {
    let phone = raw.trim();
    if phone.is_empty() {
        return Ok(None);
    }
    if !CREATE_PHONE_RE.is_match(phone) {
        return Err(invalid("Enter a valid phone number (10–15 digits)"));
    }
    Ok(Some(phone.to_string()))
}

/// Validate a phone number supplied in a partial update.
///
/// Stricter than creation: exactly [`UPDATE_PHONE_DIGITS`] digits, and a
/// blank string is rejected rather than treated as "clear".
pub fn validate_phone_on_update(raw: &str) -> Result<String, CoreError> {
    let phone = raw.trim();
    if phone.len() != UPDATE_PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!(
            "Phone number must be exactly {UPDATE_PHONE_DIGITS} digits"
        )));
    }
    Ok(phone.to_string())
}
