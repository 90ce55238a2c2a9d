//! Result type definitions
//!
//! Mirrors the Open Library search envelope. Every record field is optional:
//! the payload is untrusted and partially nullable, so defaults are applied
//! when rendering, never while parsing.

use serde::{Deserialize, Serialize};

/// The search API's result envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches (may exceed the number of docs returned)
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    /// Matching records in relevance order
    #[serde(default)]
    pub docs: Vec<BookRecord>,
}

impl SearchResponse {
    /// True when there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.num_found == 0 || self.docs.is_empty()
    }
}

/// A single search result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    #[serde(default)]
    pub cover_i: Option<i64>,
    #[serde(default)]
    pub key: Option<String>,
}

impl BookRecord {
    /// First listed author, if it is a non-empty name
    pub fn first_author(&self) -> Option<&str> {
        self.author_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Cover identifier; `0` means no cover
    pub fn cover_id(&self) -> Option<i64> {
        self.cover_i.filter(|id| *id != 0)
    }

    /// First publication year; `0` means unknown
    pub fn year(&self) -> Option<i64> {
        self.first_publish_year.filter(|year| *year != 0)
    }

    /// Detail page key, if non-empty
    pub fn detail_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }
}
