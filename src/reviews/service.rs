//! Loads the reviews section: links plus, when configured, live reviews.

use super::client::PlacesClient;
use super::config::{ReviewLinks, ReviewsConfig};
use super::models::ReviewSummary;
use crate::config::Config;
use crate::error::{ReviewsError, ReviewsResult};
use crate::metrics::Metrics;
use std::sync::Arc;

/// What the reviews section renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsSection {
    /// Listing and "Leave a Review" targets; set even when nothing is fetched
    pub links: ReviewLinks,

    /// Live reviews, absent while the integration is unconfigured
    pub summary: Option<ReviewSummary>,
}

/// Loads the testimonials shown next to the contact form.
#[derive(Clone)]
pub struct ReviewsService {
    client: Arc<PlacesClient>,
    config: ReviewsConfig,
}

impl ReviewsService {
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self::with_client(
            PlacesClient::new(config.request_timeout, metrics),
            config.reviews.clone(),
        )
    }

    pub fn with_client(client: PlacesClient, config: ReviewsConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    pub fn config(&self) -> &ReviewsConfig {
        &self.config
    }

    /// Configured links, independent of any fetch.
    pub fn links(&self) -> ReviewLinks {
        self.config.links()
    }

    /// Resolve the links and fetch the place's reviews.
    ///
    /// No request is made while the place id or API key is a placeholder; the
    /// section then carries only the links.
    pub async fn load(&self) -> ReviewsResult<ReviewsSection> {
        let links = self.links();

        if !self.config.is_configured() {
            tracing::info!(
                "Google reviews not configured; set GOOGLE_PLACE_ID and GOOGLE_API_KEY to show live reviews"
            );
            return Ok(ReviewsSection {
                links,
                summary: None,
            });
        }

        let client = self.client.clone();
        let config = self.config.clone();
        let place = tokio::task::spawn_blocking(move || client.place_details(&config))
            .await
            .map_err(|e| ReviewsError::HttpError(format!("Task join error: {}", e)))??;

        let summary = ReviewSummary::from_place(&place);
        tracing::info!(
            place = place.name.as_deref().unwrap_or("unknown"),
            cards = summary.cards.len(),
            "Loaded Google reviews"
        );
        Ok(ReviewsSection {
            links,
            summary: Some(summary),
        })
    }
}
