//! Domain validation errors.

use std::fmt;

/// Outcome of validating one field: `Ok(())` is valid, `Err` carries the reason.
pub type ValidationResult = Result<(), ValidationError>;

/// Reasons a contact form field can be rejected.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The email does not have a valid shape, or uses a degenerate local part
    /// or domain label.
    InvalidEmail,

    /// The local part of the email is shorter than two characters.
    EmailTooShort,

    /// The top-level domain is shorter than two characters.
    InvalidEmailDomain,

    /// The domain belongs to a throwaway mailbox provider.
    DisposableEmail,

    /// The domain looks like a typo of a common provider.
    EmailTypo { suggestion: String },

    /// The top-level domain is a placeholder or numeric.
    PlaceholderEmail,

    /// No digits were entered.
    PhoneRequired,

    /// Fewer than ten digits were entered.
    PhoneIncomplete,

    /// The area code starts with a digit the numbering plan reserves.
    AreaCodeReserved { leading: char },

    /// The area code is not a known North American area code.
    UnknownAreaCode(String),

    /// The name is empty.
    NameRequired,

    /// The name is shorter than three characters.
    NameTooShort,

    /// The name contains digits.
    NameHasDigits,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::EmailTooShort => write!(f, "Email address is too short"),
            Self::InvalidEmailDomain => write!(f, "Please enter a valid email domain"),
            Self::DisposableEmail => write!(f, "Please use a permanent email address"),
            Self::EmailTypo { suggestion } => write!(f, "Did you mean {}?", suggestion),
            Self::PlaceholderEmail => write!(f, "Please enter a real email address"),
            Self::PhoneRequired => write!(f, "Phone number is required"),
            Self::PhoneIncomplete => write!(f, "Please enter a complete 10-digit phone number"),
            Self::AreaCodeReserved { leading } => {
                write!(f, "Area code cannot start with {}", leading)
            }
            Self::UnknownAreaCode(code) => write!(f, "Area code {} is not valid", code),
            Self::NameRequired => write!(f, "Name is required"),
            Self::NameTooShort => write!(f, "Name is too short"),
            Self::NameHasDigits => write!(f, "Name should not contain numbers"),
        }
    }
}

impl std::error::Error for ValidationError {}
