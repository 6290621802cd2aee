//! Phone number validation and live input formatting.

use super::errors::{ValidationError, ValidationResult};
use super::tables::is_known_area_code;

/// Number of digits in a complete North American number.
pub const PHONE_DIGITS: usize = 10;

/// Validate a three-digit area code.
///
/// Codes starting with `0` or `1` are never assigned by the numbering plan;
/// anything else must appear in the area code table.
pub fn validate_area_code(code: &str) -> ValidationResult {
    if let Some(leading @ ('0' | '1')) = code.chars().next() {
        return Err(ValidationError::AreaCodeReserved { leading });
    }

    if !is_known_area_code(code) {
        return Err(ValidationError::UnknownAreaCode(code.to_string()));
    }

    Ok(())
}

/// Validate a raw phone field value.
///
/// Formatting characters are ignored. The number needs at least ten digits,
/// and its first three digits must be a valid area code.
///
/// # Example
///
/// ```
/// use contact_form_core::domain::validate_phone;
///
/// assert!(validate_phone("(212) 555-1234").is_ok());
/// assert!(validate_phone("555-123-4567").is_err());
/// ```
pub fn validate_phone(raw: &str) -> ValidationResult {
    let digits = digits_only(raw);

    if digits.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }

    if digits.len() < PHONE_DIGITS {
        return Err(ValidationError::PhoneIncomplete);
    }

    validate_area_code(&digits[..3])
}

/// Reformat phone input as the user types.
///
/// Non-digits are dropped and the number is capped at ten digits. Six or more
/// digits render as `(AAA) BBB-CCCC`, three to five as `(AAA) BBB`, fewer are
/// left bare.
pub fn format_phone_input(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(PHONE_DIGITS);

    match digits.len() {
        n if n >= 6 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        n if n >= 3 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => digits,
    }
}

/// Keep only ASCII digits.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
