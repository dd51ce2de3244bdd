//! Example: Normalize provider search results
//!
//! Run with: cargo run --package normalizer --example normalize_search
//!
//! This example shows how to:
//! 1. Decode raw provider response bodies
//! 2. Convert the payloads into normalized Film/Series records
//! 3. Assign match scores (stand-in for the external fuzzy matcher)
//! 4. Rank the records
//!
//! Run with RUST_LOG=trace to see the degradation events the normalizer
//! emits for unparsable years and non-matching detail URLs.

use normalizer::{convert, rank, Film};
use providers::decode;

const MOVIE_SEARCH_BODY: &str = r#"{
    "total": 3,
    "movies": [
        {
            "id": "770687943",
            "title": "Sleepless in Seattle",
            "year": 1993,
            "ratings": { "critics_score": 90, "audience_score": 87.5 },
            "abridged_cast": [
                { "name": "Tom Hanks", "characters": ["Sam Baldwin"] },
                { "name": "Meg Ryan", "characters": ["Annie Reed"] }
            ],
            "links": { "alternate": "http://www.rottentomatoes.com/m/sleepless_in_seattle/" }
        },
        {
            "id": "771205893",
            "title": "You've Got Mail",
            "year": 1998,
            "ratings": { "critics_score": 69, "audience_score": 72 },
            "links": { "alternate": "http://www.rottentomatoes.com/m/youve_got_mail/" }
        },
        {
            "id": "12897",
            "title": "Mystery Short",
            "ratings": {}
        }
    ]
}"#;

const TV_SEARCH_BODY: &str = r#"{
    "pageCount": 1,
    "totalCount": 2,
    "tvSeries": [
        {
            "title": "Breaking Bad",
            "startYear": 2008,
            "endYear": 2013,
            "meterValue": 96,
            "url": "/tv/breaking-bad/"
        },
        {
            "title": "Oddball Listing",
            "startYear": 2020,
            "url": "http://example.com/tv/oddball"
        }
    ]
}"#;

fn main() -> providers::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    println!("=== Provider Normalization Example ===\n");

    // Movies
    let response = decode::movie_search(MOVIE_SEARCH_BODY)?;
    println!("Decoded {} of {} movies", response.movies.len(), response.total);

    let mut films: Vec<Film> = response
        .movies
        .iter()
        .map(convert::film_from_rotten)
        .collect();

    // The external fuzzy matcher would assign these; fake its output here
    for (i, film) in films.iter_mut().enumerate() {
        film.match_score = ((i * 37) % 100) as i32;
    }
    rank::sort_films_by_match_score(&mut films);

    println!("\nRanked films:");
    for (i, film) in films.iter().enumerate() {
        println!(
            "  {}. {} ({}) match={} critics={:?}",
            i + 1,
            film.title,
            film.year,
            film.match_score,
            film.rotten_scores.critics_score
        );
    }

    // Series: the second entry's URL is not site-relative, so it logs a
    // debug event and gets no canonical link
    let response = decode::tv_search(TV_SEARCH_BODY)?;
    println!("\nSeries:");
    for tv in &response.tv_series {
        let series = convert::series_from_rotten(tv);
        println!(
            "  {} ({}-{}) link={:?}",
            series.title, series.year_from, series.year_to, series.rotten_link
        );
    }

    Ok(())
}
