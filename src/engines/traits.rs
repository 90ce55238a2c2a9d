//! Engine traits and types

use crate::error::LookupError;
use crate::query::Query;
use crate::results::SearchResponse;
use std::collections::HashMap;

/// HTTP request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// Fully built URL, query string included
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, LookupError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A search backend: builds the request for a query and parses its response
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Short description of the engine
    fn about(&self) -> EngineAbout {
        EngineAbout::default()
    }

    /// Build the HTTP request for a search
    fn request(&self, query: &Query) -> EngineRequest;

    /// Parse the HTTP response into a search response
    fn response(&self, response: EngineResponse) -> Result<SearchResponse, LookupError>;
}

/// Engine metadata
#[derive(Debug, Clone, Default)]
pub struct EngineAbout {
    /// Website URL
    pub website: Option<String>,
    /// Whether it uses the official API
    pub use_official_api: bool,
    /// Result format (HTML, JSON, XML)
    pub results: String,
}

impl EngineAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn official_api(mut self, uses: bool) -> Self {
        self.use_official_api = uses;
        self
    }

    pub fn results_format(mut self, format: impl Into<String>) -> Self {
        self.results = format.into();
        self
    }
}
