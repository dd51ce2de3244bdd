//! Wire shape for the OMDb-style single-title lookup API.
//!
//! Unlike the search API, this provider types everything as free-form text:
//! years arrive as "1993" or as a combined range "2015–2019", actors arrive
//! as one comma-separated string, and even the success flag is the string
//! "True" or "False". The struct keeps all of it verbatim; interpretation
//! is the normalizer's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full single-title lookup payload.
///
/// Wire keys are the provider's mix of PascalCase and camelCase, preserved
/// exactly. `last_updated` is bookkeeping set by the caller when the result
/// is fetched; it never appears on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbSingleResult {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: String,
    pub response: String,
    #[serde(skip)]
    pub last_updated: Option<DateTime<Utc>>,
}
