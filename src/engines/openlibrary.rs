//! Open Library search engine implementation
//!
//! Uses the public search API, which returns JSON.

use super::traits::*;
use crate::config::OpenLibrarySettings;
use crate::error::LookupError;
use crate::query::Query;
use crate::results::SearchResponse;

/// Open Library search engine
pub struct OpenLibrary {
    search_url: String,
}

impl OpenLibrary {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    pub fn from_settings(settings: &OpenLibrarySettings) -> Self {
        Self::new(settings.search_url.clone())
    }
}

impl Default for OpenLibrary {
    fn default() -> Self {
        Self::from_settings(&OpenLibrarySettings::default())
    }
}

impl Engine for OpenLibrary {
    fn name(&self) -> &str {
        "openlibrary"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new()
            .website("https://openlibrary.org")
            .official_api(true)
            .results_format("JSON")
    }

    fn request(&self, query: &Query) -> EngineRequest {
        let url = format!("{}?q={}", self.search_url, query.encoded());
        EngineRequest::get(url).header("Accept", "application/json")
    }

    fn response(&self, response: EngineResponse) -> Result<SearchResponse, LookupError> {
        if !response.is_success() {
            return Err(LookupError::Status(response.status));
        }
        response.json()
    }
}
