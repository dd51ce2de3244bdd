//! Error type for decoding provider payloads.

use thiserror::Error;

/// Errors that can occur while decoding a raw provider response body.
///
/// A non-JSON body, or JSON whose fields carry the wrong types, is a
/// provider contract violation; it is surfaced here and left to the caller
/// to handle. Missing fields are not an error (they decode to zero values).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body was not valid JSON, or a present field had the wrong shape
    #[error("malformed provider response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DecodeError>;
