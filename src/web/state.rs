//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::{Engine, OpenLibrary};
use crate::network::HttpClient;
use crate::render::{CardLinks, Templates};
use crate::search::Search;
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search pipeline
    pub search: Arc<Search>,
    /// Template renderer
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let templates = Arc::new(Templates::new()?);
        let engine = Arc::new(OpenLibrary::from_settings(&settings.openlibrary));
        info!(
            "Using {} engine ({})",
            engine.name(),
            engine.about().website.unwrap_or_default()
        );
        let links = CardLinks::from(&settings.openlibrary);
        let search = Arc::new(Search::new(client, engine, templates.clone(), links));

        Ok(Self {
            settings: Arc::new(settings),
            search,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
