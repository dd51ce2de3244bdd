//! Conversion of raw provider payloads into normalized records.
//!
//! Four pure functions, one per (provider, record) pair. Each copies the
//! fields its source actually carries and leaves everything else at its
//! zero value; merging partial records from different providers is the
//! caller's job.
//!
//! Failure policy: nothing here returns an error. Unparsable year text
//! degrades to 0 and a non-matching detail URL degrades to an empty link,
//! with a trace/debug event so the degradation is observable.

use crate::types::{CastMember, Film, Series};
use providers::omdb::OmdbSingleResult;
use providers::rotten::{RottenMovie, RottenTv};
use regex::Regex;
use serde_json::Number;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Fixed host prepended to a matched TV detail path.
const ROTTEN_HOST: &str = "https://www.rottentomatoes.com";

// Allow-list match for a site-relative TV detail path: /tv/<slug> with an
// optional trailing slash, slug limited to 1-25 lowercase/digit/_/- chars.
static TV_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/tv/[0-9a-z_-]{1,25})/?").unwrap());

// A series year range like "2015–2019" or the open-ended "2015–".
// The separator is the en dash the provider emits, not an ASCII hyphen.
static YEAR_RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*)–(\d*)").unwrap());

/// Build a [`Film`] from a single-title lookup result.
///
/// Sets title, year, IMDb id and cast. Scores and the canonical link are
/// never set by this conversion; only the search provider carries them.
pub fn film_from_omdb(result: &OmdbSingleResult) -> Film {
    let mut film = Film {
        title: result.title.clone(),
        year: year_from_text(&result.year),
        imdb_id: result.imdb_id.clone(),
        ..Default::default()
    };
    if !result.actors.is_empty() {
        for fragment in result.actors.split(',') {
            film.actors.push(CastMember {
                name: collapse_whitespace(fragment),
            });
        }
    }
    film
}

/// Build a [`Film`] from a movie search payload.
///
/// Sets title, year, both scores, cast and the canonical link (the
/// payload's alternate link, verbatim). The payload's own id is an
/// internal provider id, not ours, so `id` and `imdb_id` stay empty;
/// callers merge identifiers from elsewhere.
pub fn film_from_rotten(movie: &RottenMovie) -> Film {
    let mut film = Film {
        title: movie.title.clone(),
        year: year_from_number(movie.year.as_ref()),
        rotten_link: movie.links.alternate.clone(),
        ..Default::default()
    };
    film.rotten_scores.critics_score = movie.ratings.critics_score.clone();
    film.rotten_scores.audience_score = movie.ratings.audience_score.clone();
    for entry in &movie.abridged_cast {
        // Character roles are dropped; only the actor's name is kept
        film.actors.push(CastMember {
            name: entry.name.clone(),
        });
    }
    film
}

/// Build a [`Series`] from a TV search payload.
///
/// The payload's `url` is site-relative; it only becomes a canonical link
/// when it matches the strict `/tv/<slug>` form, in which case the fixed
/// host is prepended and any trailing slash is stripped. The TV search
/// carries no audience meter, so only the critics score is set.
pub fn series_from_rotten(tv: &RottenTv) -> Series {
    let mut series = Series {
        title: tv.title.clone(),
        year_from: year_from_number(tv.start_year.as_ref()),
        year_to: year_from_number(tv.end_year.as_ref()),
        ..Default::default()
    };
    series.rotten_scores.critics_score = tv.meter_value.clone();
    match TV_URL_PATTERN.captures(&tv.url) {
        Some(caps) => series.rotten_link = format!("{ROTTEN_HOST}{}", &caps[1]),
        None => debug!(url = %tv.url, "tv url does not match /tv/<slug>, leaving link empty"),
    }
    series
}

/// Build a [`Series`] from a single-title lookup result.
///
/// The lookup reports a series' run as a combined range ("2015–2019",
/// or "2015–" while still airing); both ends are extracted, with 0 for an
/// absent end. Sets title and IMDb id; nothing else.
pub fn series_from_omdb(result: &OmdbSingleResult) -> Series {
    let mut series = Series {
        title: result.title.clone(),
        imdb_id: result.imdb_id.clone(),
        ..Default::default()
    };
    if let Some(caps) = YEAR_RANGE_PATTERN.captures(&result.year) {
        series.year_from = caps[1].parse().unwrap_or(0);
        series.year_to = caps[2].parse().unwrap_or(0);
    }
    series
}

/// Parse year text into an integer, 0 when it does not parse.
fn year_from_text(text: &str) -> i32 {
    match text.parse() {
        Ok(year) => year,
        Err(_) => {
            trace!(raw = text, "year text did not parse, defaulting to 0");
            0
        }
    }
}

/// Parse a provider year number into an integer, 0 when absent or not a
/// plain integer (e.g. "1993.5").
fn year_from_number(number: Option<&Number>) -> i32 {
    let Some(number) = number else { return 0 };
    match number.as_i64().and_then(|v| i32::try_from(v).ok()) {
        Some(year) => year,
        None => {
            trace!(raw = %number, "year value is not an integer, defaulting to 0");
            0
        }
    }
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use providers::rotten::{RottenCastEntry, RottenLinks, RottenRatings};

    #[test]
    fn year_text_parses_or_defaults_to_zero() {
        assert_eq!(year_from_text("1993"), 1993);
        assert_eq!(year_from_text("0"), 0);
        assert_eq!(year_from_text(""), 0);
        assert_eq!(year_from_text("N/A"), 0);
        assert_eq!(year_from_text("1993 "), 0);
        assert_eq!(year_from_text("2015–2019"), 0);
    }

    #[test]
    fn year_number_parses_or_defaults_to_zero() {
        assert_eq!(year_from_number(Some(&Number::from(2001))), 2001);
        assert_eq!(year_from_number(None), 0);
        let fractional: Number = "1993.5".parse().unwrap();
        assert_eq!(year_from_number(Some(&fractional)), 0);
    }

    #[test]
    fn film_from_omdb_splits_actors_in_order() {
        let result = OmdbSingleResult {
            title: "Sleepless in Seattle".to_string(),
            year: "1993".to_string(),
            imdb_id: "tt0108160".to_string(),
            actors: "Tom Hanks,  Meg  Ryan".to_string(),
            ..Default::default()
        };
        let film = film_from_omdb(&result);

        assert_eq!(film.title, "Sleepless in Seattle");
        assert_eq!(film.year, 1993);
        assert_eq!(film.imdb_id, "tt0108160");
        assert_eq!(
            film.actors,
            vec![
                CastMember { name: "Tom Hanks".to_string() },
                CastMember { name: "Meg Ryan".to_string() },
            ]
        );
        // This conversion never sets scores or the link
        assert!(film.rotten_scores.critics_score.is_none());
        assert!(film.rotten_scores.audience_score.is_none());
        assert_eq!(film.rotten_link, "");
    }

    #[test]
    fn film_from_omdb_with_no_actors_has_empty_cast() {
        let result = OmdbSingleResult {
            title: "Quiet Film".to_string(),
            ..Default::default()
        };
        let film = film_from_omdb(&result);
        assert!(film.actors.is_empty());
    }

    #[test]
    fn film_from_rotten_copies_scores_link_and_cast() {
        let movie = RottenMovie {
            id: "770687943".to_string(),
            title: "Sleepless in Seattle".to_string(),
            year: Some(Number::from(1993)),
            ratings: RottenRatings {
                critics_score: Some(Number::from(90)),
                audience_score: Some("87.5".parse().unwrap()),
                ..Default::default()
            },
            abridged_cast: vec![
                RottenCastEntry {
                    name: "Tom Hanks".to_string(),
                    id: "162655641".to_string(),
                    characters: vec!["Sam Baldwin".to_string()],
                },
                RottenCastEntry {
                    name: "Meg Ryan".to_string(),
                    ..Default::default()
                },
            ],
            links: RottenLinks {
                alternate: "http://www.rottentomatoes.com/m/sleepless_in_seattle/".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let film = film_from_rotten(&movie);

        assert_eq!(film.title, "Sleepless in Seattle");
        assert_eq!(film.year, 1993);
        assert_eq!(film.rotten_scores.critics_score, Some(Number::from(90)));
        assert_eq!(
            film.rotten_scores.audience_score.as_ref().unwrap().to_string(),
            "87.5"
        );
        assert_eq!(
            film.rotten_link,
            "http://www.rottentomatoes.com/m/sleepless_in_seattle/"
        );
        assert_eq!(film.actors.len(), 2);
        assert_eq!(film.actors[0].name, "Tom Hanks");
        assert_eq!(film.actors[1].name, "Meg Ryan");
        // The provider's own id is not carried over
        assert_eq!(film.id, "");
        assert_eq!(film.imdb_id, "");
    }

    #[test]
    fn series_from_rotten_builds_link_from_slug() {
        let tv = RottenTv {
            title: "Breaking Bad".to_string(),
            start_year: Some(Number::from(2008)),
            end_year: Some(Number::from(2013)),
            meter_value: Some(Number::from(96)),
            url: "/tv/breaking-bad/".to_string(),
            ..Default::default()
        };
        let series = series_from_rotten(&tv);

        assert_eq!(series.year_from, 2008);
        assert_eq!(series.year_to, 2013);
        assert_eq!(series.rotten_scores.critics_score, Some(Number::from(96)));
        assert!(series.rotten_scores.audience_score.is_none());
        assert_eq!(
            series.rotten_link,
            "https://www.rottentomatoes.com/tv/breaking-bad"
        );
    }

    #[test]
    fn series_link_requires_the_strict_slug_form() {
        let cases = [
            "/tv/Breaking_Bad",                  // uppercase not allowed
            "/movies/breaking-bad/",             // wrong section
            "http://example.com/tv/breaking-bad",// not anchored at the start
            "/tv/",                              // empty slug
        ];
        for url in cases {
            let tv = RottenTv {
                url: url.to_string(),
                ..Default::default()
            };
            assert_eq!(series_from_rotten(&tv).rotten_link, "", "url: {url}");
        }

        // No trailing slash is fine too
        let tv = RottenTv {
            url: "/tv/breaking-bad".to_string(),
            ..Default::default()
        };
        assert_eq!(
            series_from_rotten(&tv).rotten_link,
            "https://www.rottentomatoes.com/tv/breaking-bad"
        );
    }

    #[test]
    fn series_link_truncates_an_over_long_slug() {
        // The slug pattern is anchored at the start but not the end, so a
        // slug past 25 characters still matches on its first 25 and the
        // link comes out truncated rather than empty.
        let tv = RottenTv {
            url: "/tv/abcdefghijklmnopqrstuvwxyz/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            series_from_rotten(&tv).rotten_link,
            "https://www.rottentomatoes.com/tv/abcdefghijklmnopqrstuvwxy"
        );
    }

    #[test]
    fn series_from_omdb_extracts_year_range() {
        let mut result = OmdbSingleResult {
            title: "Running Show".to_string(),
            year: "2015–2019".to_string(),
            imdb_id: "tt4786824".to_string(),
            ..Default::default()
        };
        let series = series_from_omdb(&result);
        assert_eq!(series.title, "Running Show");
        assert_eq!(series.imdb_id, "tt4786824");
        assert_eq!(series.year_from, 2015);
        assert_eq!(series.year_to, 2019);

        // Still airing: open-ended range
        result.year = "2015–".to_string();
        let series = series_from_omdb(&result);
        assert_eq!(series.year_from, 2015);
        assert_eq!(series.year_to, 0);

        // A plain movie-style year has no dash at all
        result.year = "2015".to_string();
        let series = series_from_omdb(&result);
        assert_eq!(series.year_from, 0);
        assert_eq!(series.year_to, 0);
    }

    #[test]
    fn collapse_whitespace_normalizes_fragments() {
        assert_eq!(collapse_whitespace("  Tom   Hanks "), "Tom Hanks");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
