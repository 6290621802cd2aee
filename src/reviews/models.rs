//! Places API payloads and the testimonials presentation model.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reviews rated below this are not shown.
const MIN_SHOWN_RATING: f64 = 4.0;

/// Maximum number of review cards shown.
const MAX_CARDS: usize = 6;

/// Review text longer than this is cut and ends with `...`.
const MAX_TEXT_CHARS: usize = 300;

/// `result` object of a Places details response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub user_ratings_total: Option<u32>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// One review of a Places details response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub author_name: String,
    pub rating: f64,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub profile_photo_url: Option<String>,

    #[serde(default)]
    pub relative_time_description: Option<String>,
}

/// One of the five stars of a rating display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five stars for a rating: whole points are full, a fractional part of at
/// least one half adds a half star, the rest are empty.
pub fn star_rating(rating: f64) -> [Star; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        if i < full {
            *star = Star::Full;
        } else if i == full && half {
            *star = Star::Half;
        }
    }
    stars
}

/// A review ready to render in the testimonials grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCard {
    pub author: String,
    pub photo_url: String,
    pub stars: [Star; 5],
    pub text: String,
    pub time_ago: String,
    pub featured: bool,
}

impl ReviewCard {
    pub fn from_review(review: &Review, featured: bool) -> Self {
        let photo_url = review.profile_photo_url.clone().unwrap_or_else(|| {
            format!(
                "https://ui-avatars.com/api/?name={}&background=c9a227&color=0a0f1c&size=80&font-size=0.4",
                urlencoding::encode(&review.author_name)
            )
        });

        Self {
            author: review.author_name.clone(),
            photo_url,
            stars: star_rating(review.rating),
            text: truncate_text(review.text.as_deref().unwrap_or_default()),
            time_ago: review
                .relative_time_description
                .clone()
                .unwrap_or_else(|| "Recently".to_string()),
            featured,
        }
    }
}

fn truncate_text(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_TEXT_CHARS).collect();
    format!("{}...", cut.trim())
}

/// Cards for the best reviews: rated 4 or more, highest first, at most six,
/// the first one featured.
pub fn select_reviews(reviews: &[Review]) -> Vec<ReviewCard> {
    let mut shown: Vec<&Review> = reviews
        .iter()
        .filter(|review| review.rating >= MIN_SHOWN_RATING)
        .collect();
    shown.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    shown
        .into_iter()
        .take(MAX_CARDS)
        .enumerate()
        .map(|(i, review)| ReviewCard::from_review(review, i == 0))
        .collect()
}

/// Everything the reviews section shows for a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    /// Average rating with one decimal, e.g. `"4.8"`
    pub rating_label: Option<String>,
    pub average_stars: Option<[Star; 5]>,
    pub total_reviews: Option<u32>,
    pub cards: Vec<ReviewCard>,
}

impl ReviewSummary {
    pub fn from_place(place: &PlaceDetails) -> Self {
        let rating = place.rating.filter(|rating| *rating > 0.0);
        Self {
            rating_label: rating.map(|rating| format!("{:.1}", rating)),
            average_stars: rating.map(star_rating),
            total_reviews: place.user_ratings_total.filter(|total| *total > 0),
            cards: select_reviews(&place.reviews),
        }
    }
}
