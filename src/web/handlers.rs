//! HTTP request handlers

use super::state::AppState;
use crate::render::{DisplayCard, DisplayState};
use crate::search::WatchSurface;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    Json,
};
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Output format
    pub format: Option<String>,
}

/// Search response for JSON format
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub state: &'static str,
    pub message: Option<&'static str>,
    pub number_of_results: u64,
    pub results: Vec<DisplayCard>,
}

impl SearchResponse {
    fn new(query: String, state: DisplayState) -> Self {
        let kind = state.kind();
        let message = state.message();
        let (number_of_results, results) = match state {
            DisplayState::Results(view) => (view.total, view.cards),
            _ => (0, vec![]),
        };
        Self {
            query,
            state: kind,
            message,
            number_of_results,
            results,
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, None, &DisplayState::Idle)
}

/// Search handler
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    // No query at all means nothing was searched yet
    let Some(raw_query) = params.q else {
        return render_page(&state, None, &DisplayState::Idle);
    };

    let display = state.search.resolve(&raw_query).await;

    match params.format.as_deref() {
        Some("json") => {
            Json(SearchResponse::new(raw_query.trim().to_string(), display)).into_response()
        }
        _ => render_page(&state, Some(raw_query.trim()), &display),
    }
}

/// Streams every replacement of a live results surface as Server-Sent Events,
/// then a final `done` event.
pub async fn search_stream(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let surface = Arc::new(WatchSurface::new());
    let rx = surface.subscribe();

    let search = state.search.clone();
    let raw_query = params.q.unwrap_or_default();
    tokio::spawn(async move {
        search.run(&raw_query, surface.as_ref()).await;
    });

    // Ends once the search task drops the surface
    let updates = stream::unfold(rx, |mut rx| async move {
        rx.changed().await.ok()?;
        // SSE fields cannot carry carriage returns
        let content = rx.borrow_and_update().replace('\r', "");
        Some((Ok::<_, Infallible>(Event::default().data(content)), rx))
    });
    let done = stream::once(async { Ok::<_, Infallible>(Event::default().event("done").data("")) });

    Sse::new(updates.chain(done)).keep_alive(KeepAlive::default())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

fn render_page(state: &AppState, query: Option<&str>, display: &DisplayState) -> Response {
    match state
        .templates
        .render_page(state.instance_name(), query, display)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}
