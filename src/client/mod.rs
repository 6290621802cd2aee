//! HTTP client for the third-party form backend.
//!
//! This module provides a synchronous HTTP client that posts the contact form
//! as a form-encoded body and asks for a JSON answer. It can be used from async
//! contexts through [`AsyncFormClient`], which runs it on
//! `tokio::task::spawn_blocking`.

mod async_wrapper;
pub use async_wrapper::{AsyncFormClient, FormSubmitter};

use crate::config::Config;
use crate::domain::FormFields;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Success payload of the form backend. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct SuccessPayload {
    #[serde(default)]
    next: Option<String>,
}

/// Error payload of the form backend. Entries are kept loose so one odd
/// entry does not hide the others.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

/// What the backend told us about an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// HTTP status of the response
    pub status: u16,

    /// Optional follow-up URL returned by the backend
    pub next: Option<String>,
}

/// Extract the `errors[].message` list from an error body.
///
/// Entries without a string `message` are skipped. Returns an empty list when
/// the body is not JSON or lists no errors.
pub fn parse_error_messages(body: &str) -> Vec<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .map(|payload| {
            payload
                .errors
                .iter()
                .filter_map(|entry| entry.get("message")?.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// HTTP client for the form backend.
///
/// This client uses `ureq` for synchronous HTTP requests.
#[derive(Clone)]
pub struct FormClient {
    /// Endpoint the form is posted to
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl FormClient {
    /// Create a new FormClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            endpoint: config.form_endpoint.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a FormClient for an arbitrary endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post every named form value to the backend.
    ///
    /// A 2xx answer is a success. Any other status becomes
    /// [`SubmitError::Rejected`] carrying the messages of the error payload.
    /// Failures to reach the backend become [`SubmitError::Transport`] or
    /// [`SubmitError::Timeout`].
    pub fn submit(&self, fields: &FormFields) -> SubmitResult<SubmitReceipt> {
        let timer = HttpTimer::new(self.metrics.clone());
        let pairs: Vec<(&str, &str)> = fields.pairs().collect();

        tracing::debug!("POST {} ({} fields)", self.endpoint, pairs.len());

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .send_form(&pairs);

        match result {
            Ok(response) => {
                timer.complete();
                let status = response.status();
                tracing::debug!("POST {} - Success (status: {})", self.endpoint, status);

                let body = response.into_string().unwrap_or_default();
                let payload: SuccessPayload = serde_json::from_str(&body).unwrap_or_default();
                Ok(SubmitReceipt {
                    status,
                    next: payload.next,
                })
            }
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::error!("POST {} - Error: {:?}", self.endpoint, error);
                Err(error)
            }
        }
    }

    /// Whether a transport failure is the agent's timeout firing.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        use std::error::Error;

        transport.kind() == ureq::ErrorKind::Io
            && transport
                .source()
                .and_then(|source| source.downcast_ref::<std::io::Error>())
                .is_some_and(|io| {
                    matches!(
                        io.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    )
                })
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                SubmitError::Rejected {
                    status,
                    messages: parse_error_messages(&body),
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmitError::Transport("Connection failed".to_string())
                } else if Self::is_timeout(&transport) {
                    SubmitError::Timeout
                } else {
                    SubmitError::Transport(transport.to_string())
                }
            }
        }
    }
}
