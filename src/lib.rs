//! Contact form core - validation, submission and notifications for a
//! business website's contact form.
//!
//! The crate holds everything behind the form that is not markup: field
//! validators, inline error display, the submission controller and its HTTP
//! client, notification toasts, and the Google reviews section shown beside the
//! form.
//!
//! # Architecture
//!
//! - **domain**: Field model and pure validators for name, email and phone
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the form backend
//! - **services**: The contact form submission controller
//! - **notifications**: Single active toast with timed auto-dismiss
//! - **ui**: Traits the host UI implements, plus a console host
//! - **reviews**: Google Places reviews and the testimonials reel
//! - **metrics**: Submission and HTTP counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod notifications;
pub mod reviews;
pub mod services;
pub mod ui;

pub use client::{AsyncFormClient, FormClient, FormSubmitter, SubmitReceipt};
pub use config::Config;
pub use domain::{
    format_phone_input, validate_email, validate_field, validate_form, validate_name,
    validate_phone, FieldError, FieldId, FormFields, ValidationError, ValidationReport,
};
pub use error::{ConfigError, ReviewsError, SubmitError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use notifications::{NotificationCenter, NotificationTiming, Toast, ToastKind};
pub use reviews::{ReviewSummary, ReviewsConfig, ReviewsService};
pub use services::{ContactFormController, SubmissionOutcome, SubmissionState};
pub use ui::{AnalyticsSink, FormView, NotificationSurface};
