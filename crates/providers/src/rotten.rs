//! Wire shapes for the Rotten Tomatoes-style search API.
//!
//! These structs mirror the provider's JSON payloads field-for-field.
//! They carry everything the provider may send, including fields the
//! normalizer never looks at (posters, synopsis, release dates), so that
//! decoding and re-encoding a payload is lossless.
//!
//! Two decoding rules apply throughout:
//! - Every struct is `#[serde(default)]`: a field the provider omits
//!   decodes to its zero value instead of failing the whole payload.
//! - Numeric-looking fields are `Option<serde_json::Number>`, never `f64`.
//!   The provider emits both whole scores ("87") and fractional ones
//!   ("87.5"), and the exact text must survive a round-trip.

use serde::{Deserialize, Serialize};
use serde_json::Number;

// =============================================================================
// Search response envelopes
// =============================================================================

/// Response envelope for a movie search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieSearchResponse {
    pub total: u32,
    pub movies: Vec<RottenMovie>,
}

/// Response envelope for a TV search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvSearchResponse {
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    #[serde(rename = "tvSeries")]
    pub tv_series: Vec<RottenTv>,
}

// =============================================================================
// Movie payload
// =============================================================================

/// A single movie as returned by the movie search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenMovie {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Number>,
    pub mpaa_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Number>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub critics_consensus: String,
    pub release_dates: RottenReleaseDates,
    pub ratings: RottenRatings,
    pub synopsis: String,
    pub posters: RottenPosters,
    pub abridged_cast: Vec<RottenCastEntry>,
    pub links: RottenLinks,
}

/// Theater and DVD release dates, free-form text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenReleaseDates {
    pub theater: String,
    pub dvd: String,
}

/// The critic/audience rating block nested inside a movie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenRatings {
    pub critics_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critics_score: Option<Number>,
    pub audience_rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_score: Option<Number>,
}

/// Poster URLs at the sizes the provider renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenPosters {
    pub thumbnail: String,
    pub profile: String,
    pub detailed: String,
    pub original: String,
}

/// One entry of the abridged cast list: the actor plus the characters
/// they play.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenCastEntry {
    pub name: String,
    pub id: String,
    pub characters: Vec<String>,
}

/// Hyperlink references attached to a movie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub alternate: String,
    pub cast: String,
    pub reviews: String,
    pub similar: String,
}

// =============================================================================
// TV payload
// =============================================================================

/// A single series as returned by the TV search endpoint.
///
/// Note the narrower field set compared to [`RottenMovie`]: no id, no cast,
/// and only a critics meter. The `url` field is a site-relative path
/// (`/tv/<slug>/`), not an absolute link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RottenTv {
    pub title: String,
    #[serde(rename = "endYear", skip_serializing_if = "Option::is_none")]
    pub end_year: Option<Number>,
    #[serde(rename = "startYear", skip_serializing_if = "Option::is_none")]
    pub start_year: Option<Number>,
    #[serde(rename = "posterImage", skip_serializing_if = "String::is_empty")]
    pub poster_image: String,
    #[serde(rename = "meterClass")]
    pub meter_class: String,
    pub image: String,
    pub url: String,
    #[serde(rename = "meterValue", skip_serializing_if = "Option::is_none")]
    pub meter_value: Option<Number>,
}
