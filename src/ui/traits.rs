//! Seams between the form logic and the host UI.

use crate::domain::{FieldId, FormFields};
use crate::notifications::{Toast, ToastId};
use serde::Serialize;

/// The contact form as rendered by the host.
///
/// Implementations own the inputs, the per-field error slots and the submit
/// control. All methods take `&self`; hosts keep their own interior state.
pub trait FormView: Send + Sync {
    /// Snapshot every named input.
    fn read_fields(&self) -> FormFields;

    /// Replace the value of one input.
    fn set_field_value(&self, key: &str, value: &str);

    /// Empty every input.
    fn reset_fields(&self);

    /// Put a field in its error state and show `message` in its error slot.
    fn show_field_error(&self, field: FieldId, message: &str);

    /// Remove a field's error state and message.
    fn clear_field_error(&self, field: FieldId);

    /// Current label of the submit control.
    fn submit_label(&self) -> String;

    /// Set the submit control's label and whether it accepts clicks.
    fn set_submit_control(&self, label: &str, enabled: bool);
}

/// Where notification toasts are drawn (the document body in a browser).
pub trait NotificationSurface: Send + Sync {
    /// Insert a toast node: icon for its kind, message and close control.
    fn mount(&self, toast: &Toast);

    /// Play the exit transition of a mounted toast.
    fn start_exit(&self, id: ToastId);

    /// Detach a toast node.
    fn detach(&self, id: ToastId);
}

/// An analytics event, in the shape of a `gtag('event', ...)` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            label: label.into(),
        }
    }

    /// Conversion event emitted after a delivered contact form.
    pub fn form_submission() -> Self {
        Self::new("form_submission", "lead", "contact_form")
    }
}

/// Receives analytics events; delivery is up to the host.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}
