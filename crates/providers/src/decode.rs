//! Typed decoding of raw provider response bodies.
//!
//! The HTTP client upstream hands over bodies as text; these helpers turn
//! each body into its wire struct. One function per endpoint shape:
//! - `movie_search`: movie search response (Rotten-style)
//! - `tv_search`: TV search response (Rotten-style)
//! - `single_result`: single-title lookup (OMDb-style)

use crate::error::Result;
use crate::omdb::OmdbSingleResult;
use crate::rotten::{MovieSearchResponse, TvSearchResponse};

/// Decode a movie search response body.
pub fn movie_search(body: &str) -> Result<MovieSearchResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a TV search response body.
pub fn tv_search(body: &str) -> Result<TvSearchResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a single-title lookup body.
pub fn single_result(body: &str) -> Result<OmdbSingleResult> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_movie_search_envelope() {
        let response = movie_search(
            r#"{ "total": 2, "movies": [ { "title": "Alpha" }, { "title": "Beta" } ] }"#,
        )
        .unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.movies.len(), 2);
        assert_eq!(response.movies[1].title, "Beta");
    }

    #[test]
    fn decodes_tv_search_envelope() {
        let response = tv_search(
            r#"{ "pageCount": 5, "totalCount": 93,
                 "tvSeries": [ { "title": "Gamma", "url": "/tv/gamma/" } ] }"#,
        )
        .unwrap();
        assert_eq!(response.page_count, 5);
        assert_eq!(response.total_count, 93);
        assert_eq!(response.tv_series[0].url, "/tv/gamma/");
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(movie_search("<html>502 Bad Gateway</html>").is_err());
        assert!(single_result("").is_err());
    }
}
