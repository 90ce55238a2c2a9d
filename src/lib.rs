//! bookfinder: a small book search widget backed by the Open Library search API
//!
//! One search is one pipeline run: the raw input is normalized into a
//! [`Query`], looked up with a single HTTP call, and the outcome is rendered
//! into the results area of the page.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod query;
pub mod render;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{LookupError, SearchError};
pub use query::Query;
pub use render::{DisplayCard, DisplayState};
pub use results::{BookRecord, SearchResponse};
pub use search::{Search, Surface, WatchSurface};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of result cards shown for a search
pub const RESULTS_PER_PAGE: usize = 10;
