//! Contact form submission controller.
//!
//! Orchestrates one submission attempt: clear errors, validate every field,
//! render failures inline or post the form, report the result as a toast, and
//! hand the submit control back to the user.

use crate::client::{FormSubmitter, SubmitReceipt};
use crate::domain::{format_phone_input, validate_form, FieldId, ValidationReport};
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::notifications::{NotificationCenter, ToastKind};
use crate::ui::{
    AnalyticsEvent, AnalyticsSink, ErrorDisplay, FormView, SubmitGuard, LOADING_LABEL,
};
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll contact you within 24 hours.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Oops! There was a problem submitting your form. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Where the controller is within a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Failure,
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Field validation failed; nothing was sent.
    Invalid(ValidationReport),

    /// The backend accepted the form.
    Delivered,

    /// The backend answered with an error status; carries its messages.
    Rejected(Vec<String>),

    /// The backend could not be reached.
    TransportFailed,
}

/// Drives the contact form.
///
/// The controller owns the per-form state (error display, submission state)
/// and is handed every UI event explicitly.
pub struct ContactFormController {
    view: Arc<dyn FormView>,
    submitter: Arc<dyn FormSubmitter>,
    notifications: NotificationCenter,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    metrics: Metrics,
    errors: ErrorDisplay,
    state: SubmissionState,
}

impl ContactFormController {
    pub fn new(
        view: Arc<dyn FormView>,
        submitter: Arc<dyn FormSubmitter>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            view,
            submitter,
            notifications,
            analytics: None,
            metrics: Metrics::new(),
            errors: ErrorDisplay::new(),
            state: SubmissionState::Idle,
        }
    }

    /// Emit conversion events to `sink` after successful submissions.
    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    /// Record attempts into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn errors(&self) -> &ErrorDisplay {
        &self.errors
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = ?self.state, to = ?next, "Submission state");
        self.state = next;
    }

    /// Handle the form's submit event.
    pub async fn handle_submit(&mut self) -> SubmissionOutcome {
        self.metrics.record_submit_attempt();
        let fields = self.view.read_fields();

        self.transition(SubmissionState::Validating);
        self.errors.clear_field_errors(self.view.as_ref());

        let report = validate_form(&fields);
        if !report.is_valid() {
            for failure in report.errors() {
                let message = failure.message();
                self.errors
                    .show_field_error(self.view.as_ref(), failure.field, &message);
            }
            tracing::debug!(failures = report.errors().len(), "Contact form has field errors");
            self.metrics.record_validation_failure();
            self.transition(SubmissionState::Invalid);
            self.transition(SubmissionState::Idle);
            return SubmissionOutcome::Invalid(report);
        }

        self.transition(SubmissionState::Submitting);
        let outcome = {
            let _submit_control = SubmitGuard::engage(self.view.clone(), LOADING_LABEL);
            let result = self.submitter.submit(&fields).await;
            self.report_result(result)
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    fn report_result(&mut self, result: SubmitResult<SubmitReceipt>) -> SubmissionOutcome {
        match result {
            Ok(receipt) => {
                tracing::info!(status = receipt.status, "Contact form delivered");
                self.transition(SubmissionState::Success);
                self.metrics.record_delivered();
                self.notifications.show(SUCCESS_MESSAGE, ToastKind::Success);
                self.view.reset_fields();
                if let Some(analytics) = &self.analytics {
                    analytics.track(&AnalyticsEvent::form_submission());
                }
                SubmissionOutcome::Delivered
            }
            Err(SubmitError::Rejected { status, messages }) => {
                tracing::warn!(status, "Contact form rejected: {:?}", messages);
                self.transition(SubmissionState::Failure);
                self.metrics.record_rejected();
                let text = if messages.is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    messages.join(", ")
                };
                self.notifications.show(text, ToastKind::Error);
                SubmissionOutcome::Rejected(messages)
            }
            Err(e) => {
                tracing::error!("Contact form could not be sent: {}", e);
                self.transition(SubmissionState::Failure);
                self.metrics.record_transport_failure();
                self.notifications.show(NETWORK_ERROR_MESSAGE, ToastKind::Error);
                SubmissionOutcome::TransportFailed
            }
        }
    }

    /// Handle a field gaining focus: drop that field's stale error only.
    pub fn handle_focus(&mut self, field: FieldId) {
        self.errors.clear_field_error(self.view.as_ref(), field);
    }

    /// Handle typing in the phone input: reformat it in place.
    pub fn handle_phone_input(&self) {
        let key = FieldId::Phone.key();
        let raw = self.view.read_fields().get(key).to_string();
        let formatted = format_phone_input(&raw);
        if formatted != raw {
            self.view.set_field_value(key, &formatted);
        }
    }
}
