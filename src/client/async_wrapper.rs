//! Async wrapper around the synchronous FormClient.
//!
//! The controller awaits submissions through the [`FormSubmitter`] trait;
//! [`AsyncFormClient`] implements it by running the blocking `ureq` call on
//! `tokio::task::spawn_blocking`, so the event loop stays responsive while the
//! request is in flight.

use crate::client::{FormClient, SubmitReceipt};
use crate::domain::FormFields;
use crate::error::{SubmitError, SubmitResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends a form snapshot to the form backend.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, fields: &FormFields) -> SubmitResult<SubmitReceipt>;
}

/// Async wrapper around synchronous FormClient.
#[derive(Clone)]
pub struct AsyncFormClient {
    client: Arc<FormClient>,
}

impl AsyncFormClient {
    pub fn new(client: FormClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl FormSubmitter for AsyncFormClient {
    async fn submit(&self, fields: &FormFields) -> SubmitResult<SubmitReceipt> {
        let client = self.client.clone();
        let fields = fields.clone();

        tokio::task::spawn_blocking(move || client.submit(&fields))
            .await
            .map_err(|e| SubmitError::Transport(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::metrics::Metrics;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = Config {
            form_endpoint: "http://127.0.0.1:9/f/contact".to_string(),
            request_timeout: 2,
            ..Config::default()
        };
        let client = AsyncFormClient::new(FormClient::new(&config, Metrics::new()));

        let result = client
            .submit(&FormFields::new().with("name", "Jane Doe"))
            .await;
        assert!(result.unwrap_err().is_transport());
    }
}
