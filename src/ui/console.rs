//! Console host for driving the contact form without a browser.
//!
//! `ConsoleForm` keeps the form in memory, `ConsoleToasts` prints notifications
//! to stdout and `TracingAnalytics` forwards analytics events to the log.

use crate::domain::{FieldId, FormFields};
use crate::notifications::{Toast, ToastIcon, ToastId};
use crate::ui::{AnalyticsEvent, AnalyticsSink, FormView, NotificationSurface};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct ConsoleFormState {
    fields: FormFields,
    errors: BTreeMap<FieldId, String>,
    submit_label: String,
    submit_enabled: bool,
}

/// In-memory contact form.
#[derive(Debug)]
pub struct ConsoleForm {
    state: Mutex<ConsoleFormState>,
}

impl ConsoleForm {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ConsoleFormState {
                submit_label: submit_label.into(),
                submit_enabled: true,
                ..ConsoleFormState::default()
            }),
        }
    }

    /// Fill the form with a snapshot of values.
    pub fn with_fields(self, fields: FormFields) -> Self {
        self.state().fields = fields;
        self
    }

    fn state(&self) -> MutexGuard<'_, ConsoleFormState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Message currently shown for a field.
    pub fn field_error(&self, field: FieldId) -> Option<String> {
        self.state().errors.get(&field).cloned()
    }

    /// Every flagged field with its message, in form order.
    pub fn field_errors(&self) -> Vec<(FieldId, String)> {
        self.state()
            .errors
            .iter()
            .map(|(field, message)| (*field, message.clone()))
            .collect()
    }

    pub fn submit_enabled(&self) -> bool {
        self.state().submit_enabled
    }
}

impl FormView for ConsoleForm {
    fn read_fields(&self) -> FormFields {
        self.state().fields.clone()
    }

    fn set_field_value(&self, key: &str, value: &str) {
        self.state().fields.set(key, value);
    }

    fn reset_fields(&self) {
        let mut state = self.state();
        state.fields = state.fields.pairs().map(|(key, _)| (key, "")).collect();
    }

    fn show_field_error(&self, field: FieldId, message: &str) {
        self.state().errors.insert(field, message.to_string());
    }

    fn clear_field_error(&self, field: FieldId) {
        self.state().errors.remove(&field);
    }

    fn submit_label(&self) -> String {
        self.state().submit_label.clone()
    }

    fn set_submit_control(&self, label: &str, enabled: bool) {
        let mut state = self.state();
        state.submit_label = label.to_string();
        state.submit_enabled = enabled;
    }
}

/// Prints toasts to stdout.
#[derive(Debug, Default)]
pub struct ConsoleToasts {
    mounted: Mutex<Vec<ToastId>>,
}

impl ConsoleToasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the toasts currently mounted.
    pub fn mounted(&self) -> Vec<ToastId> {
        self.mounted
            .lock()
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }
}

impl NotificationSurface for ConsoleToasts {
    fn mount(&self, toast: &Toast) {
        let icon = match toast.kind.icon() {
            ToastIcon::CheckCircle => "[ok]",
            ToastIcon::CrossCircle => "[error]",
        };
        println!("{} {}", icon, toast.message);
        tracing::debug!(toast = toast.id, class = toast.kind.css_class(), "Notification mounted");

        if let Ok(mut ids) = self.mounted.lock() {
            ids.push(toast.id);
        }
    }

    fn start_exit(&self, id: ToastId) {
        tracing::debug!(toast = id, "Notification exit transition");
    }

    fn detach(&self, id: ToastId) {
        if let Ok(mut ids) = self.mounted.lock() {
            ids.retain(|mounted| *mounted != id);
        }
    }
}

/// Logs analytics events instead of sending them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        tracing::info!(
            event = %event.name,
            category = %event.category,
            label = %event.label,
            "Analytics event"
        );
    }
}
