//! Google reviews integration and the testimonials reel.
//!
//! When the place id or API key are still placeholders the integration does
//! nothing beyond logging a configuration hint. Otherwise the place details are
//! fetched and turned into the presentation model the testimonials section
//! renders.

mod client;
mod config;
mod models;
mod reel;
mod service;

pub use client::PlacesClient;
pub use config::{
    ReviewLinks, ReviewsConfig, PLACEHOLDER_API_KEY, PLACEHOLDER_MAPS_URL, PLACEHOLDER_PLACE_ID,
    PLACEHOLDER_REVIEW_URL,
};
pub use models::{
    select_reviews, star_rating, PlaceDetails, Review, ReviewCard, ReviewSummary, Star,
};
pub use reel::seamless_reel;
pub use service::{ReviewsSection, ReviewsService};
