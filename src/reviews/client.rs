//! Synchronous client for the Places details endpoint.

use super::config::ReviewsConfig;
use super::models::PlaceDetails;
use crate::error::{ReviewsError, ReviewsResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Fields requested from the details endpoint.
const DETAIL_FIELDS: &str = "name,rating,reviews,user_ratings_total";

/// Envelope of a Places details response.
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,

    #[serde(default)]
    result: Option<PlaceDetails>,

    #[serde(default)]
    error_message: Option<String>,
}

/// HTTP client for the Places API.
#[derive(Clone)]
pub struct PlacesClient {
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl PlacesClient {
    pub fn new(timeout_secs: u64, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            agent: Arc::new(agent),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the details URL for a place.
    fn details_url(config: &ReviewsConfig) -> String {
        format!(
            "{}/maps/api/place/details/json?place_id={}&fields={}&key={}",
            config.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&config.place_id),
            urlencoding::encode(DETAIL_FIELDS),
            urlencoding::encode(&config.api_key)
        )
    }

    /// Fetch the details of the configured place.
    ///
    /// A response whose `status` is not `OK` is an [`ReviewsError::ApiError`],
    /// even when it came back with HTTP 200.
    pub fn place_details(&self, config: &ReviewsConfig) -> ReviewsResult<PlaceDetails> {
        if !config.is_configured() {
            return Err(ReviewsError::NotConfigured);
        }

        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!(place_id = %config.place_id, "GET place details");

        let response = match self.agent.get(&Self::details_url(config)).call() {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::error!("GET place details - Error: {:?}", error);
                return Err(error);
            }
        };
        timer.complete();

        let body = response
            .into_string()
            .map_err(|e| ReviewsError::HttpError(format!("Failed to read response: {}", e)))?;
        let envelope: DetailsResponse = serde_json::from_str(&body)?;

        if envelope.status != "OK" {
            return Err(ReviewsError::ApiError {
                message: envelope
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string()),
                status: envelope.status,
            });
        }

        Ok(envelope.result.unwrap_or_default())
    }

    fn map_error(error: ureq::Error) -> ReviewsError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                ReviewsError::ApiError {
                    status: code.to_string(),
                    message: body,
                }
            }
            ureq::Error::Transport(transport) => ReviewsError::HttpError(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_url_is_encoded() {
        let config = ReviewsConfig {
            place_id: "ChIJ a&b".to_string(),
            api_key: "key/123".to_string(),
            api_base_url: "http://localhost:1234/".to_string(),
            ..ReviewsConfig::default()
        };

        assert_eq!(
            PlacesClient::details_url(&config),
            "http://localhost:1234/maps/api/place/details/json?place_id=ChIJ%20a%26b\
             &fields=name%2Crating%2Creviews%2Cuser_ratings_total&key=key%2F123"
        );
    }

    #[test]
    fn test_unconfigured_does_not_call_out() {
        let client = PlacesClient::new(1, Metrics::new());
        let result = client.place_details(&ReviewsConfig::default());
        assert!(matches!(result, Err(ReviewsError::NotConfigured)));
        assert_eq!(client.metrics().http_requests_total(), 0);
    }
}
