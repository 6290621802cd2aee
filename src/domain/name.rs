//! Name validation.

use super::errors::{ValidationError, ValidationResult};

/// Validate a raw name field value.
pub fn validate_name(raw: &str) -> ValidationResult {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    if name.chars().count() < 3 {
        return Err(ValidationError::NameTooShort);
    }

    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NameHasDigits);
    }

    Ok(())
}
