//! Request payloads sent to the backend.
//!
//! These are transient: assembled from one submission, encoded once, dropped.

use serde::Serialize;

use super::FormNumber;

/// Director used for movies submitted without one.
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Body of `POST /api/users/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRegistration {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub tier: Option<String>,
}

/// Fields shared by every kind of catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub release_year: FormNumber,
}

/// Body of `POST /api/content`, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentCreate {
    #[serde(rename = "MOVIE")]
    Movie {
        #[serde(flatten)]
        details: ContentDetails,
        duration: FormNumber,
        director: String,
    },
    #[serde(rename = "TV_SERIES", rename_all = "camelCase")]
    TvSeries {
        #[serde(flatten)]
        details: ContentDetails,
        seasons: FormNumber,
        episodes_per_season: FormNumber,
    },
}

impl ContentCreate {
    /// A movie. A missing or empty director becomes [`UNKNOWN_DIRECTOR`].
    pub fn movie(details: ContentDetails, duration: FormNumber, director: Option<String>) -> Self {
        let director = director
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string());
        ContentCreate::Movie {
            details,
            duration,
            director,
        }
    }

    pub fn tv_series(
        details: ContentDetails,
        seasons: FormNumber,
        episodes_per_season: FormNumber,
    ) -> Self {
        ContentCreate::TvSeries {
            details,
            seasons,
            episodes_per_season,
        }
    }

    /// Value of the `type` discriminator.
    pub fn content_type(&self) -> &'static str {
        match self {
            ContentCreate::Movie { .. } => "MOVIE",
            ContentCreate::TvSeries { .. } => "TV_SERIES",
        }
    }

    pub fn details(&self) -> &ContentDetails {
        match self {
            ContentCreate::Movie { details, .. } | ContentCreate::TvSeries { details, .. } => {
                details
            }
        }
    }
}

/// Body of `POST /api/videos/watch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEvent {
    pub user_id: FormNumber,
    pub content_id: FormNumber,
    /// Seconds watched.
    pub progress: FormNumber,
    pub completed: bool,
}

/// Body of `POST /api/videos/rate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEvent {
    pub user_id: FormNumber,
    pub content_id: FormNumber,
    pub score: FormNumber,
}

/// Recommendations request. Travels in the URL, not in a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationQuery {
    pub user_id: FormNumber,
    pub limit: FormNumber,
}

impl RecommendationQuery {
    pub fn path(&self) -> String {
        format!("/api/recommendations/{}?limit={}", self.user_id, self.limit)
    }
}
