//! Ranking of normalized records by match score.
//!
//! The match score itself comes from the external fuzzy-matching process;
//! these sorters only order what the caller already scored. Highest score
//! first; the order among equal scores is unspecified.

use crate::types::{Film, Series};

/// Sort films by descending match score, in place.
pub fn sort_films_by_match_score(films: &mut [Film]) {
    films.sort_unstable_by(|a, b| b.match_score.cmp(&a.match_score));
}

/// Sort series by descending match score, in place.
pub fn sort_series_by_match_score(series: &mut [Series]) {
    series.sort_unstable_by(|a, b| b.match_score.cmp(&a.match_score));
}
