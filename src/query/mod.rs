//! Query normalization
//!
//! Raw input is trimmed and rejected when nothing is left. No other
//! validation is applied: no length limits, no character filtering.

use crate::error::SearchError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Normalized, non-empty search text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query(String);

impl Query {
    /// Normalize raw input into a query
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a single query parameter value
    pub fn encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
