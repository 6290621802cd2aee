//! Email address validation.

use super::errors::{ValidationError, ValidationResult};
use super::tables::{is_disposable_domain, typo_correction, PLACEHOLDER_TLDS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Strict address shape, applied to the lowercased value: dot-separated atoms in
/// the local part, and at least two domain labels made of alphanumerics with
/// inner hyphens.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"#,
    )
    .expect("Failed to compile email shape regex")
});

/// Validate a raw email field value.
///
/// The value is trimmed and lowercased first. Checks run in a fixed order and
/// the first failure wins: shape, local-part length, TLD length, disposable
/// domain, typo suggestion, placeholder TLD, repeated characters.
///
/// A domain found in the typo table is reported as
/// [`ValidationError::EmailTypo`] carrying the corrected address; the caller is
/// expected to show it and let the user resubmit.
///
/// # Example
///
/// ```
/// use contact_form_core::domain::validate_email;
///
/// assert!(validate_email("  Jane.Doe@Acme.com ").is_ok());
/// assert!(validate_email("jane@mailinator.com").is_err());
/// ```
pub fn validate_email(raw: &str) -> ValidationResult {
    let email = raw.trim().to_lowercase();

    if !EMAIL_SHAPE.is_match(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let tld = domain.rsplit('.').next().unwrap_or_default();

    if local.chars().count() < 2 {
        return Err(ValidationError::EmailTooShort);
    }

    if tld.len() < 2 {
        return Err(ValidationError::InvalidEmailDomain);
    }

    if is_disposable_domain(domain) {
        return Err(ValidationError::DisposableEmail);
    }

    if let Some(corrected) = typo_correction(domain) {
        return Err(ValidationError::EmailTypo {
            suggestion: format!("{}@{}", local, corrected),
        });
    }

    if PLACEHOLDER_TLDS.contains(&tld) || tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PlaceholderEmail);
    }

    let first_label = domain.split('.').next().unwrap_or_default();
    if is_one_char_repeated(local) || is_one_char_repeated(first_label) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// `true` for strings like `"aaa"`: at least two characters, all identical.
fn is_one_char_repeated(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => s.chars().count() >= 2 && chars.all(|c| c == first),
        None => false,
    }
}
