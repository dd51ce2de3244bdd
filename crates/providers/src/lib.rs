//! # Providers Crate
//!
//! Raw wire shapes for the two upstream metadata providers, plus typed
//! decode helpers. This crate is purely structural: it knows how each
//! provider lays out its JSON and nothing about what the fields mean.
//!
//! ## Main Components
//!
//! - **rotten**: search-API payloads (movie and TV) from the
//!   Rotten Tomatoes-style provider
//! - **omdb**: single-title lookup payload from the OMDb-style provider
//! - **decode**: body text -> wire struct, one function per endpoint
//! - **error**: the decode error type
//!
//! ## Example Usage
//!
//! ```ignore
//! use providers::decode;
//!
//! // `body` is the response text fetched by the HTTP client upstream
//! let response = decode::movie_search(&body)?;
//! for movie in &response.movies {
//!     println!("{} ({:?})", movie.title, movie.year);
//! }
//! ```
//!
//! ## Decoding Guarantees
//!
//! 1. **Lossless round-trips**: every field a provider may send is kept on
//!    the wire struct, including ones the rest of the system discards,
//!    and re-encoding reproduces the payload.
//! 2. **Exact numbers**: scores and years that arrive as JSON numbers are
//!    held as `serde_json::Number`, so "87.5" stays "87.5".
//! 3. **Tolerant of omission**: missing fields decode to zero values;
//!    only a malformed body or a wrongly-typed field is an error.

// Public modules
pub mod decode;
pub mod error;
pub mod omdb;
pub mod rotten;

// Re-export commonly used types for convenience
pub use error::{DecodeError, Result};
pub use omdb::OmdbSingleResult;
pub use rotten::{
    MovieSearchResponse, RottenCastEntry, RottenLinks, RottenMovie, RottenPosters,
    RottenRatings, RottenReleaseDates, RottenTv, TvSearchResponse,
};
