use async_trait::async_trait;
use contact_form_core::client::{FormSubmitter, SubmitReceipt};
use contact_form_core::domain::FormFields;
use contact_form_core::error::{SubmitError, SubmitResult};
use std::sync::{Arc, Mutex};

/// Scripted answer of the mock backend.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Accepted,
    Rejected(u16, Vec<String>),
    ConnectionFailed,
    Timeout,
}

/// Mock form submitter for testing.
///
/// Answers every call with the configured response and remembers what was
/// sent.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmitter {
    response: Arc<Mutex<MockResponse>>,
    submissions: Arc<Mutex<Vec<FormFields>>>,
}

#[allow(dead_code)]
impl MockSubmitter {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, response: MockResponse) {
        *self.response.lock().unwrap() = response;
    }

    /// Get the number of times submit was called.
    pub fn get_call_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn last_submission(&self) -> Option<FormFields> {
        self.submissions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl FormSubmitter for MockSubmitter {
    async fn submit(&self, fields: &FormFields) -> SubmitResult<SubmitReceipt> {
        self.submissions.lock().unwrap().push(fields.clone());

        let response = self.response.lock().unwrap().clone();
        match response {
            MockResponse::Accepted => Ok(SubmitReceipt {
                status: 200,
                next: None,
            }),
            MockResponse::Rejected(status, messages) => {
                Err(SubmitError::Rejected { status, messages })
            }
            MockResponse::ConnectionFailed => {
                Err(SubmitError::Transport("Connection failed".to_string()))
            }
            MockResponse::Timeout => Err(SubmitError::Timeout),
        }
    }
}
