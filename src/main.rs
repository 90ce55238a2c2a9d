//! bookfinder: a small book search widget backed by the Open Library search API
//!
//! This is the main entry point for the application.

use anyhow::Result;
use bookfinder::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting bookfinder v{}", bookfinder::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state
    let state = AppState::new(settings, client)?;
    info!("Search endpoint: {}", state.settings.openlibrary.search_url);

    // Create router
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
