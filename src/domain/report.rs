//! Whole-form validation.

use super::email::validate_email;
use super::errors::{ValidationError, ValidationResult};
use super::fields::{FieldId, FormFields};
use super::name::validate_name;
use super::phone::validate_phone;

/// A failing field with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub error: ValidationError,
}

impl FieldError {
    /// Message shown in the field's error slot.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Every failure found in one pass over the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// `true` when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields, in form order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Failure for one field, if any.
    pub fn error_for(&self, field: FieldId) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    fn record(&mut self, field: FieldId, result: ValidationResult) {
        if let Err(error) = result {
            self.errors.push(FieldError { field, error });
        }
    }
}

/// Validate a single field value with the validator that owns it.
pub fn validate_field(field: FieldId, raw: &str) -> ValidationResult {
    match field {
        FieldId::Name => validate_name(raw),
        FieldId::Email => validate_email(raw),
        FieldId::Phone => validate_phone(raw),
    }
}

/// Validate every checked field of a form snapshot.
///
/// Fields are validated independently, so one failure never hides another.
pub fn validate_form(fields: &FormFields) -> ValidationReport {
    let mut report = ValidationReport::default();
    for field in FieldId::ALL {
        report.record(field, validate_field(field, fields.field(field)));
    }
    report
}
