//! Google reviews settings and the links they resolve to.

use serde::Serialize;

pub const PLACEHOLDER_PLACE_ID: &str = "YOUR_GOOGLE_PLACE_ID";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GOOGLE_API_KEY";
pub const PLACEHOLDER_REVIEW_URL: &str = "https://g.page/r/YOUR_BUSINESS_ID/review";
pub const PLACEHOLDER_MAPS_URL: &str = "https://maps.google.com/?cid=YOUR_CID";

const PLACES_API_BASE_URL: &str = "https://maps.googleapis.com";

/// Settings of the Google reviews integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsConfig {
    /// Google place id of the business listing
    pub place_id: String,

    /// Places API key
    pub api_key: String,

    /// Target of the "Leave a Review" button
    pub review_url: String,

    /// Google Maps listing of the business
    pub maps_url: String,

    /// Base URL of the Places API
    pub api_base_url: String,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            place_id: PLACEHOLDER_PLACE_ID.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            review_url: PLACEHOLDER_REVIEW_URL.to_string(),
            maps_url: PLACEHOLDER_MAPS_URL.to_string(),
            api_base_url: PLACES_API_BASE_URL.to_string(),
        }
    }
}

impl ReviewsConfig {
    /// Whether live reviews can be fetched.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
            && !self.place_id.trim().is_empty()
            && self.api_key != PLACEHOLDER_API_KEY
            && self.place_id != PLACEHOLDER_PLACE_ID
    }

    /// Link for the Google listing, unless still a placeholder.
    pub fn maps_link(&self) -> Option<&str> {
        Some(self.maps_url.as_str()).filter(|url| *url != PLACEHOLDER_MAPS_URL)
    }

    /// Link for the "Leave a Review" button, unless still a placeholder.
    pub fn review_link(&self) -> Option<&str> {
        Some(self.review_url.as_str()).filter(|url| *url != PLACEHOLDER_REVIEW_URL)
    }

    /// Both links, each `None` while still a placeholder.
    pub fn links(&self) -> ReviewLinks {
        ReviewLinks {
            maps: self.maps_link().map(str::to_string),
            review: self.review_link().map(str::to_string),
        }
    }
}

/// Targets of the Google listing link and the "Leave a Review" button.
///
/// A `None` link keeps whatever the page ships with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewLinks {
    pub maps: Option<String>,
    pub review: Option<String>,
}
