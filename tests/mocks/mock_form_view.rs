use contact_form_core::domain::{FieldId, FormFields};
use contact_form_core::ui::FormView;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock form view for testing.
///
/// Keeps the form in memory and records every call that changes the submit
/// control or the error slots, so tests can verify exactly what the host saw.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockFormView {
    fields: Arc<Mutex<FormFields>>,
    errors: Arc<Mutex<BTreeMap<FieldId, String>>>,
    submit_label: Arc<Mutex<String>>,
    submit_enabled: Arc<Mutex<bool>>,
    control_history: Arc<Mutex<Vec<(String, bool)>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockFormView {
    /// Create a form with the given submit label and values.
    pub fn new(submit_label: &str, fields: FormFields) -> Self {
        Self {
            fields: Arc::new(Mutex::new(fields)),
            errors: Arc::new(Mutex::new(BTreeMap::new())),
            submit_label: Arc::new(Mutex::new(submit_label.to_string())),
            submit_enabled: Arc::new(Mutex::new(true)),
            control_history: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// A form filled with values that pass every validator.
    pub fn valid() -> Self {
        Self::new(
            "Get Free Quote",
            FormFields::new()
                .with("name", "Jane Doe")
                .with("email", "jane@acmeco.com")
                .with("phone", "(212) 555-0100")
                .with("message", "Need a quote"),
        )
    }

    /// A form where name, email and phone are all invalid.
    pub fn invalid() -> Self {
        Self::new(
            "Get Free Quote",
            FormFields::new()
                .with("name", "A")
                .with("email", "bad")
                .with("phone", "123"),
        )
    }

    pub fn value(&self, key: &str) -> String {
        self.fields.lock().unwrap().get(key).to_string()
    }

    pub fn field_error(&self, field: FieldId) -> Option<String> {
        self.errors.lock().unwrap().get(&field).cloned()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn submit_enabled(&self) -> bool {
        *self.submit_enabled.lock().unwrap()
    }

    /// Every `(label, enabled)` the submit control was set to, in order.
    pub fn control_history(&self) -> Vec<(String, bool)> {
        self.control_history.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl FormView for MockFormView {
    fn read_fields(&self) -> FormFields {
        self.increment_call_count("read_fields");
        self.fields.lock().unwrap().clone()
    }

    fn set_field_value(&self, key: &str, value: &str) {
        self.increment_call_count("set_field_value");
        self.fields.lock().unwrap().set(key, value);
    }

    fn reset_fields(&self) {
        self.increment_call_count("reset_fields");
        let mut fields = self.fields.lock().unwrap();
        *fields = fields.pairs().map(|(key, _)| (key, "")).collect();
    }

    fn show_field_error(&self, field: FieldId, message: &str) {
        self.increment_call_count("show_field_error");
        self.errors.lock().unwrap().insert(field, message.to_string());
    }

    fn clear_field_error(&self, field: FieldId) {
        self.increment_call_count("clear_field_error");
        self.errors.lock().unwrap().remove(&field);
    }

    fn submit_label(&self) -> String {
        self.submit_label.lock().unwrap().clone()
    }

    fn set_submit_control(&self, label: &str, enabled: bool) {
        self.increment_call_count("set_submit_control");
        *self.submit_label.lock().unwrap() = label.to_string();
        *self.submit_enabled.lock().unwrap() = enabled;
        self.control_history
            .lock()
            .unwrap()
            .push((label.to_string(), enabled));
    }
}
