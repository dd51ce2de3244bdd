//! # Normalizer Crate
//!
//! Turns raw provider payloads into the normalized `Film` and `Series`
//! records the rest of the system works with, and orders those records by
//! match score.
//!
//! ## Main Components
//!
//! - **types**: the normalized records (`Film`, `Series`, `CastMember`,
//!   `RottenScores`) and the metadata equality check
//! - **convert**: one pure conversion per (provider, record) pair
//! - **rank**: match-score sorters
//!
//! ## Example Usage
//!
//! ```ignore
//! use normalizer::{convert, rank};
//!
//! let response = providers::decode::movie_search(&body)?;
//! let mut films: Vec<_> = response
//!     .movies
//!     .iter()
//!     .map(convert::film_from_rotten)
//!     .collect();
//!
//! // ... external fuzzy matcher assigns film.match_score ...
//!
//! rank::sort_films_by_match_score(&mut films);
//! ```
//!
//! ## Failure Policy
//!
//! Conversion never fails. Unparsable year text becomes 0 and a detail URL
//! that does not match the expected form becomes an empty link; the caller
//! decides whether such a record is still usable. Every operation here is
//! a pure, synchronous function over immutable inputs, safe to call from
//! any number of threads without coordination.

// Public modules
pub mod convert;
pub mod rank;
pub mod types;

// Re-export commonly used items for convenience
pub use convert::{film_from_omdb, film_from_rotten, series_from_omdb, series_from_rotten};
pub use rank::{sort_films_by_match_score, sort_series_by_match_score};
pub use types::{films_are_equal, CastMember, Film, RottenScores, Series};
