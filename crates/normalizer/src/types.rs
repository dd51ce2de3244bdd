//! Normalized domain records, independent of any provider's shape.
//!
//! `Film` and `Series` are what the rest of the system stores, matches and
//! ranks. They are plain value objects: conversion creates them, nothing
//! mutates them in place, and the caller discards them when done.
//!
//! Serialized field names are a fixed external contract (the persistence
//! layer stores records under these keys); do not rename them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

// =============================================================================
// Score pair
// =============================================================================

/// Critic and audience scores for a title.
///
/// Scores stay `serde_json::Number` rather than a float so that exact
/// decimal text like "87.5" survives storage and re-encoding. `None` means
/// the provider never supplied a value, and the key is omitted on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RottenScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critics_score: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_score: Option<Number>,
}

// =============================================================================
// Film
// =============================================================================

/// A normalized movie record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub title: String,
    /// Release year; 0 when the provider's year text was unparsable
    pub year: i32,
    /// Canonical detail-page URL; empty when no provider link matched
    pub rotten_link: String,
    pub rotten_scores: RottenScores,
    pub imdb_id: String,
    pub actors: Vec<CastMember>,
    /// Relevance score assigned by the external fuzzy-matching process.
    /// Serialized for transport, but the datastore layer drops it.
    pub match_score: i32,
    /// When this record was last refreshed; in-memory bookkeeping only
    #[serde(skip)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// A normalized series record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub title: String,
    /// First air year; 0 when unknown or unparsable
    pub year_from: i32,
    /// Last air year; 0 for still-running series or unparsable text
    pub year_to: i32,
    pub rotten_scores: RottenScores,
    pub rotten_link: String,
    pub imdb_id: String,
    pub actors: Vec<CastMember>,
    /// See [`Film::match_score`]
    pub match_score: i32,
    #[serde(skip)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// One cast member, by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMember {
    pub name: String,
}

// =============================================================================
// Metadata equality
// =============================================================================

/// Whether two films carry the same stored metadata.
///
/// Compares id, both scores, canonical link, IMDb id, title and year.
/// Cast and match score are deliberately ignored: the cast list is
/// best-effort and the match score is transient, so neither should trigger
/// a rewrite of stored data. Score comparison is textual ("87.0" and "87"
/// are different), matching how the scores are stored.
pub fn films_are_equal(a: &Film, b: &Film) -> bool {
    a.id == b.id
        && a.rotten_scores.audience_score == b.rotten_scores.audience_score
        && a.rotten_scores.critics_score == b.rotten_scores.critics_score
        && a.rotten_link == b.rotten_link
        && a.imdb_id == b.imdb_id
        && a.title == b.title
        && a.year == b.year
}
