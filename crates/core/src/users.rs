//! User field constraints and validation functions.
//!
//! The `role` field is free text by design (see [`crate::roles`] for the
//! well-known names); validation only rejects blank or over-length values.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 100;

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for a role name.
pub const MAX_ROLE_LENGTH: usize = 100;

/// Maximum length for a first or last name.
pub const MAX_PERSON_NAME_LENGTH: usize = 100;

/// Validate a username: required, non-blank, bounded length.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation(
            "Username must not be blank".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an email address: required, bounded length, well-formed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(())
}

/// Validate a role name: required, non-blank, bounded length.
///
/// Any non-blank string is accepted; roles are not an enum.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if role.trim().is_empty() {
        return Err(CoreError::Validation("Role must not be blank".to_string()));
    }
    if role.chars().count() > MAX_ROLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Role exceeds maximum length of {MAX_ROLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional first/last name: bounded length. Blank is allowed.
pub fn validate_person_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() > MAX_PERSON_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name exceeds maximum length of {MAX_PERSON_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
