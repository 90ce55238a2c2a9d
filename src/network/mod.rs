//! HTTP networking module
//!
//! Provides the HTTP client used for lookups against the search API.

mod client;

pub use client::HttpClient;
