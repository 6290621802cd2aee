//! Integration tests for the contact form submission flow.

mod mocks;

use async_trait::async_trait;
use contact_form_core::client::{FormSubmitter, SubmitReceipt};
use contact_form_core::domain::{FieldId, FormFields};
use contact_form_core::error::SubmitResult;
use contact_form_core::notifications::{NotificationCenter, NotificationTiming, ToastKind};
use contact_form_core::services::{
    ContactFormController, SubmissionOutcome, SubmissionState, GENERIC_FAILURE_MESSAGE,
    NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use contact_form_core::ui::FormView;
use contact_form_core::Metrics;
use mocks::{MockAnalytics, MockFormView, MockResponse, MockSubmitter, MockSurface};
use std::sync::{Arc, Mutex};

struct Harness {
    view: MockFormView,
    submitter: MockSubmitter,
    surface: MockSurface,
    analytics: MockAnalytics,
    controller: ContactFormController,
}

fn harness(view: MockFormView, response: MockResponse) -> Harness {
    let submitter = MockSubmitter::new(response);
    let surface = MockSurface::new();
    let analytics = MockAnalytics::new();
    let notifications =
        NotificationCenter::new(Arc::new(surface.clone()), NotificationTiming::default());

    let controller = ContactFormController::new(
        Arc::new(view.clone()),
        Arc::new(submitter.clone()),
        notifications,
    )
    .with_analytics(Arc::new(analytics.clone()));

    Harness {
        view,
        submitter,
        surface,
        analytics,
        controller,
    }
}

#[tokio::test]
async fn test_invalid_form_shows_every_error_without_sending() {
    let mut h = harness(MockFormView::invalid(), MockResponse::Accepted);

    let outcome = h.controller.handle_submit().await;

    let SubmissionOutcome::Invalid(report) = outcome else {
        panic!("expected validation failure, got {:?}", outcome);
    };
    assert_eq!(report.errors().len(), 3);
    assert_eq!(h.view.error_count(), 3);
    assert_eq!(
        h.view.field_error(FieldId::Name).as_deref(),
        Some("Name is too short")
    );
    assert_eq!(
        h.view.field_error(FieldId::Email).as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        h.view.field_error(FieldId::Phone).as_deref(),
        Some("Please enter a complete 10-digit phone number")
    );

    assert_eq!(h.submitter.get_call_count(), 0);
    assert!(h.view.submit_enabled());
    assert!(h.view.control_history().is_empty());
    assert!(h.surface.mounted().is_empty());
    assert_eq!(h.controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_successful_submission() {
    let mut h = harness(MockFormView::valid(), MockResponse::Accepted);

    let outcome = h.controller.handle_submit().await;

    assert_eq!(outcome, SubmissionOutcome::Delivered);
    assert_eq!(h.submitter.get_call_count(), 1);

    let sent = h.submitter.last_submission().unwrap();
    assert_eq!(sent.get("name"), "Jane Doe");
    assert_eq!(sent.get("message"), "Need a quote");

    // Exactly one success toast
    let mounted = h.surface.mounted();
    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].message, SUCCESS_MESSAGE);
    assert_eq!(mounted[0].kind, ToastKind::Success);

    // Fields were reset
    assert_eq!(h.view.value("name"), "");
    assert_eq!(h.view.value("email"), "");
    assert_eq!(h.view.get_call_count("reset_fields"), 1);

    let events = h.analytics.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "form_submission");
    assert_eq!(events[0].category, "lead");
    assert_eq!(events[0].label, "contact_form");
}

#[tokio::test]
async fn test_submit_control_restored_exactly_once() {
    for response in [
        MockResponse::Accepted,
        MockResponse::Rejected(422, vec!["nope".to_string()]),
        MockResponse::ConnectionFailed,
        MockResponse::Timeout,
    ] {
        let mut h = harness(MockFormView::valid(), response.clone());
        h.controller.handle_submit().await;

        assert_eq!(
            h.view.control_history(),
            vec![
                ("Sending...".to_string(), false),
                ("Get Free Quote".to_string(), true),
            ],
            "control history for {:?}",
            response
        );
        assert!(h.view.submit_enabled());
    }
}

#[tokio::test]
async fn test_rejected_messages_are_joined() {
    let mut h = harness(
        MockFormView::valid(),
        MockResponse::Rejected(
            422,
            vec![
                "should be an email".to_string(),
                "form is disabled".to_string(),
            ],
        ),
    );

    let outcome = h.controller.handle_submit().await;

    assert!(matches!(outcome, SubmissionOutcome::Rejected(ref m) if m.len() == 2));
    assert_eq!(
        h.surface.messages(),
        vec!["should be an email, form is disabled".to_string()]
    );
    assert_eq!(h.surface.mounted()[0].kind, ToastKind::Error);

    // Nothing is reset on failure
    assert_eq!(h.view.value("name"), "Jane Doe");
    assert!(h.analytics.events().is_empty());
    assert_eq!(h.controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_rejected_without_messages_uses_generic_text() {
    let mut h = harness(MockFormView::valid(), MockResponse::Rejected(500, vec![]));

    h.controller.handle_submit().await;

    assert_eq!(
        h.surface.messages(),
        vec![GENERIC_FAILURE_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn test_transport_failure_shows_network_error() {
    let mut h = harness(MockFormView::valid(), MockResponse::ConnectionFailed);

    let outcome = h.controller.handle_submit().await;

    assert_eq!(outcome, SubmissionOutcome::TransportFailed);
    assert_eq!(h.surface.messages(), vec![NETWORK_ERROR_MESSAGE.to_string()]);
    assert_eq!(h.view.value("email"), "jane@acmeco.com");
}

#[tokio::test]
async fn test_resubmit_after_fixing_clears_old_errors() {
    let mut h = harness(MockFormView::invalid(), MockResponse::Accepted);
    h.controller.handle_submit().await;
    assert_eq!(h.view.error_count(), 3);

    h.view.set_field_value("name", "Jane Doe");
    h.view.set_field_value("email", "jane@acmeco.com");
    h.view.set_field_value("phone", "2125550100");

    let outcome = h.controller.handle_submit().await;
    assert_eq!(outcome, SubmissionOutcome::Delivered);
    assert_eq!(h.view.error_count(), 0);
    assert!(!h.controller.errors().has_errors());
}

#[tokio::test]
async fn test_focus_clears_only_that_field() {
    let mut h = harness(MockFormView::invalid(), MockResponse::Accepted);
    h.controller.handle_submit().await;

    h.controller.handle_focus(FieldId::Email);

    assert_eq!(h.view.field_error(FieldId::Email), None);
    assert!(h.view.field_error(FieldId::Name).is_some());
    assert!(h.view.field_error(FieldId::Phone).is_some());
    assert_eq!(
        h.controller.errors().fields().collect::<Vec<_>>(),
        vec![FieldId::Name, FieldId::Phone]
    );
}

#[tokio::test]
async fn test_phone_input_is_formatted_live() {
    let h = harness(
        MockFormView::new("Send", FormFields::new().with("phone", "21255")),
        MockResponse::Accepted,
    );

    h.controller.handle_phone_input();
    assert_eq!(h.view.value("phone"), "(212) 55");

    h.view.set_field_value("phone", "(212) 5550100");
    h.controller.handle_phone_input();
    assert_eq!(h.view.value("phone"), "(212) 555-0100");
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let metrics = Metrics::new();
    let mut h = harness(MockFormView::invalid(), MockResponse::Accepted);
    h.controller = ContactFormController::new(
        Arc::new(h.view.clone()),
        Arc::new(h.submitter.clone()),
        NotificationCenter::new(Arc::new(h.surface.clone()), NotificationTiming::default()),
    )
    .with_metrics(metrics.clone());

    h.controller.handle_submit().await;
    h.view.set_field_value("name", "Jane Doe");
    h.view.set_field_value("email", "jane@acmeco.com");
    h.view.set_field_value("phone", "2125550100");
    h.controller.handle_submit().await;

    let summary = metrics.summary();
    assert_eq!(summary.submit_attempts_total, 2);
    assert_eq!(summary.validation_failures_total, 1);
    assert_eq!(summary.submissions_delivered_total, 1);
}

/// Submitter that records the submit control state while the request is in flight.
struct ObservingSubmitter {
    view: MockFormView,
    seen: Mutex<Vec<(String, bool)>>,
}

#[async_trait]
impl FormSubmitter for ObservingSubmitter {
    async fn submit(&self, _fields: &FormFields) -> SubmitResult<SubmitReceipt> {
        self.seen
            .lock()
            .unwrap()
            .push((self.view.submit_label(), self.view.submit_enabled()));
        Ok(SubmitReceipt {
            status: 200,
            next: None,
        })
    }
}

#[tokio::test]
async fn test_control_disabled_while_in_flight() {
    let view = MockFormView::valid();
    let submitter = Arc::new(ObservingSubmitter {
        view: view.clone(),
        seen: Mutex::new(Vec::new()),
    });
    let mut controller = ContactFormController::new(
        Arc::new(view.clone()),
        submitter.clone(),
        NotificationCenter::new(Arc::new(MockSurface::new()), NotificationTiming::default()),
    );

    controller.handle_submit().await;

    assert_eq!(
        *submitter.seen.lock().unwrap(),
        vec![("Sending...".to_string(), false)]
    );
    assert_eq!(view.submit_label(), "Get Free Quote");
}

#[tokio::test]
async fn test_empty_name_bad_email_short_phone() {
    let view = MockFormView::new(
        "Get Free Quote",
        FormFields::new()
            .with("name", "")
            .with("email", "jane@@acme")
            .with("phone", "212555010"),
    );
    let mut h = harness(view, MockResponse::Accepted);

    h.controller.handle_submit().await;

    assert_eq!(
        h.view.field_error(FieldId::Name).as_deref(),
        Some("Name is required")
    );
    assert!(h.view.field_error(FieldId::Email).is_some());
    assert!(h.view.field_error(FieldId::Phone).is_some());
    assert_eq!(h.submitter.get_call_count(), 0);
    assert!(h.view.submit_enabled());
}
