//! Error taxonomy for a single search

use thiserror::Error;

/// Why a search did not produce a response
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was blank after trimming; no network call is made
    #[error("empty query")]
    EmptyQuery,
    /// The lookup failed for any reason
    #[error("lookup failed: {0}")]
    LookupFailed(#[from] LookupError),
}

/// Cause of a failed lookup. Only ever logged, never shown to the user.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}
