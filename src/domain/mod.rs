//! Domain types and field validators.
//!
//! This module contains the contact form's field model and the pure validators
//! that classify a raw field value as valid or invalid. Validators never touch
//! the UI; the [`crate::ui`] layer renders whatever they report.

pub mod email;
pub mod errors;
pub mod fields;
pub mod name;
pub mod phone;
pub mod report;
pub mod tables;

pub use email::validate_email;
pub use errors::{ValidationError, ValidationResult};
pub use fields::{FieldId, FormFields};
pub use name::validate_name;
pub use phone::{format_phone_input, validate_area_code, validate_phone};
pub use report::{validate_field, validate_form, FieldError, ValidationReport};
