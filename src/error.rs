//! Error types for the contact form core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`]; they never
//! reach the network layer.

use thiserror::Error;

/// Errors that can occur when submitting the contact form to the form backend.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The backend answered with a non-success status.
    ///
    /// `messages` holds every `{message}` entry of the structured error payload,
    /// and is empty when the payload listed none or could not be parsed.
    #[error("Submission rejected (status {status}): {}", messages.join(", "))]
    Rejected { status: u16, messages: Vec<String> },

    /// The request never completed (DNS, connection refused, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl SubmitError {
    /// Whether the request failed before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when fetching reviews from the places API.
#[derive(Error, Debug)]
pub enum ReviewsError {
    /// The place id or API key is still a placeholder.
    #[error("Reviews integration is not configured")]
    NotConfigured,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code or a non-OK payload status
    #[error("Places API error ({status}): {message}")]
    ApiError { status: String, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ReviewsError
pub type ReviewsResult<T> = Result<T, ReviewsError>;
