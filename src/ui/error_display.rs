//! Inline field error bookkeeping.

use crate::domain::FieldId;
use crate::ui::FormView;
use std::collections::BTreeMap;

/// Inline field errors currently on screen.
///
/// Mirrors what has been pushed to the [`FormView`] so the controller can tell
/// which fields are flagged without asking the host.
#[derive(Debug, Default, Clone)]
pub struct ErrorDisplay {
    shown: BTreeMap<FieldId, String>,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a field and show `message`; a second call replaces the message.
    pub fn show_field_error(&mut self, view: &dyn FormView, field: FieldId, message: &str) {
        view.show_field_error(field, message);
        self.shown.insert(field, message.to_string());
    }

    /// Clear every field, whether or not it is flagged.
    pub fn clear_field_errors(&mut self, view: &dyn FormView) {
        for field in FieldId::ALL {
            view.clear_field_error(field);
        }
        self.shown.clear();
    }

    /// Clear one field, leaving the others as they are.
    pub fn clear_field_error(&mut self, view: &dyn FormView, field: FieldId) {
        view.clear_field_error(field);
        self.shown.remove(&field);
    }

    /// Message shown for a field, if flagged.
    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.shown.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.shown.is_empty()
    }

    /// Flagged fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.shown.keys().copied()
    }
}
