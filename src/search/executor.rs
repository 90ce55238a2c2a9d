//! Search execution: normalize, look up, render

use super::surface::Surface;
use crate::engines::Engine;
use crate::error::{LookupError, SearchError};
use crate::network::HttpClient;
use crate::query::Query;
use crate::render::{CardLinks, DisplayState, Templates};
use crate::results::SearchResponse;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Search pipeline: one lookup per invocation, nothing kept between them
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Backend building and parsing lookups
    engine: Arc<dyn Engine>,
    /// Renderer for surface content
    templates: Arc<Templates>,
    /// Hosts used to build card URLs
    links: CardLinks,
}

impl Search {
    /// Create a new search pipeline
    pub fn new(
        client: HttpClient,
        engine: Arc<dyn Engine>,
        templates: Arc<Templates>,
        links: CardLinks,
    ) -> Self {
        Self {
            client,
            engine,
            templates,
            links,
        }
    }

    /// Perform exactly one lookup for a non-empty query
    pub async fn lookup(&self, query: &Query) -> Result<SearchResponse, LookupError> {
        let request = self.engine.request(query);
        debug!("Requesting {} from {}", request.url, self.engine.name());

        let response = self.client.execute(request).await?;
        self.engine.response(response)
    }

    /// Normalize raw input and look it up
    pub async fn execute(&self, raw: &str) -> Result<SearchResponse, SearchError> {
        let query = Query::parse(raw)?;
        Ok(self.lookup(&query).await?)
    }

    /// Terminal display state for raw input
    pub async fn resolve(&self, raw: &str) -> DisplayState {
        match Query::parse(raw) {
            Ok(query) => self.search(&query).await,
            Err(_) => DisplayState::EmptyPrompt,
        }
    }

    /// Drive a surface through a full search: the Searching notice first,
    /// then the terminal state. Returns the terminal state.
    pub async fn run<S: Surface + ?Sized>(&self, raw: &str, surface: &S) -> DisplayState {
        let ticket = surface.begin();

        let state = match Query::parse(raw) {
            Ok(query) => {
                surface.present(ticket, self.templates.render_fragment(&DisplayState::Searching));
                self.search(&query).await
            }
            Err(_) => DisplayState::EmptyPrompt,
        };

        if !surface.present(ticket, self.templates.render_fragment(&state)) {
            debug!("Discarded {} state from superseded search", state.kind());
        }

        state
    }

    async fn search(&self, query: &Query) -> DisplayState {
        let search_id = Uuid::new_v4();
        let start = Instant::now();

        let outcome = self.lookup(query).await.map_err(SearchError::from);

        match &outcome {
            Ok(response) => info!(
                "Search {} for '{}' returned {} matches in {:?}",
                search_id,
                query,
                response.num_found,
                start.elapsed()
            ),
            Err(e) => error!("Search {} for '{}' failed: {}", search_id, query, e),
        }

        DisplayState::from_outcome(&outcome, &self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::OpenLibrary;
    use crate::render::ERROR_MESSAGE;
    use crate::search::WatchSurface;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{any, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pipeline(search_url: String) -> Search {
        Search::new(
            HttpClient::new().unwrap(),
            Arc::new(OpenLibrary::new(search_url)),
            Arc::new(Templates::new().unwrap()),
            CardLinks::default(),
        )
    }

    fn dune_body() -> serde_json::Value {
        json!({
            "numFound": 2,
            "docs": [
                {
                    "title": "Dune",
                    "author_name": ["Frank Herbert"],
                    "first_publish_year": 1965,
                    "cover_i": 123,
                    "key": "/works/OL1W"
                },
                {"title": "Dune Messiah"}
            ]
        })
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        for raw in ["", "   ", "\t\n"] {
            let surface = WatchSurface::new();
            let state = search.run(raw, &surface).await;
            assert_eq!(state, DisplayState::EmptyPrompt);
            assert!(surface.current().contains("Please enter a search term"));

            assert!(matches!(search.execute(raw).await, Err(SearchError::EmptyQuery)));
        }
    }

    #[tokio::test]
    async fn test_sends_trimmed_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "dune messiah"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numFound": 0, "docs": []})))
            .expect(1)
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        let state = search.resolve("   dune messiah  ").await;
        assert_eq!(state, DisplayState::NoResults);
    }

    #[tokio::test]
    async fn test_dune_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "dune"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dune_body()))
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        let surface = WatchSurface::new();
        let state = search.run("dune", &surface).await;

        let DisplayState::Results(view) = &state else {
            panic!("expected results, got {:?}", state);
        };
        assert_eq!(view.total, 2);
        let first = &view.cards[0];
        assert_eq!(first.title, "Dune");
        assert_eq!(first.author, "Frank Herbert");
        assert_eq!(first.year, "1965");
        assert!(first.cover_url.contains("123"));
        assert_eq!(first.detail_url.as_deref(), Some("https://openlibrary.org/works/OL1W"));
        let second = &view.cards[1];
        assert_eq!(second.title, "Dune Messiah");
        assert_eq!(second.author, "Unknown Author");
        assert_eq!(second.year, "Year unknown");
        assert_eq!(second.cover_url, "https://via.placeholder.com/150x200?text=No+Cover");
        assert_eq!(second.detail_url, None);

        let html = surface.current();
        assert!(html.contains("Found 2 results"));
        assert!(html.contains(r#"<h3 class="book-title">Dune</h3>"#));
        assert!(html.contains(r#"<h3 class="book-title">Dune Messiah</h3>"#));
        assert!(html.contains(r#"href="https://openlibrary.org/works/OL1W""#));
        assert_eq!(html.matches("book-link").count(), 1);
    }

    #[tokio::test]
    async fn test_searching_notice_precedes_result() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(dune_body())
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        let surface = WatchSurface::new();
        let mut rx = surface.subscribe();

        let (state, seen) = tokio::join!(search.run("dune", &surface), async {
            rx.changed().await.unwrap();
            rx.borrow_and_update().clone()
        });

        assert!(seen.contains("Searching..."));
        assert!(state.is_terminal());
        assert!(surface.current().contains("Found 2 results"));
    }

    #[tokio::test]
    async fn test_failures_show_identical_message() {
        let server = MockServer::start().await;
        Mock::given(query_param("q", "status"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;
        Mock::given(query_param("q", "payload"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        // Nothing listens on port 1
        let unreachable = pipeline("http://127.0.0.1:1/search.json".to_string());

        let mut rendered = Vec::new();
        for (p, raw) in [(&search, "status"), (&search, "payload"), (&unreachable, "dune")] {
            let surface = WatchSurface::new();
            assert_eq!(p.run(raw, &surface).await, DisplayState::Error);
            rendered.push(surface.current());
        }

        assert!(rendered[0].contains(ERROR_MESSAGE));
        assert!(rendered.iter().all(|html| *html == rendered[0]));
        assert!(!rendered[0].contains("500"));
    }

    #[tokio::test]
    async fn test_lookup_error_kinds() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        let err = search.execute("dune").await.unwrap_err();
        assert!(matches!(err, SearchError::LookupFailed(LookupError::Status(404))));
    }

    #[tokio::test]
    async fn test_stale_search_does_not_overwrite_newer() {
        let server = MockServer::start().await;
        Mock::given(query_param("q", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"numFound": 1, "docs": [{"title": "Slow Book"}]}))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;
        Mock::given(query_param("q", "fast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"numFound": 1, "docs": [{"title": "Fast Book"}]})),
            )
            .mount(&server)
            .await;

        let search = pipeline(format!("{}/search.json", server.uri()));
        let surface = WatchSurface::new();

        let (slow, fast) = tokio::join!(search.run("slow", &surface), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            search.run("fast", &surface).await
        });

        // Both lookups complete, but only the newer one is displayed
        assert!(matches!(slow, DisplayState::Results(_)));
        assert!(matches!(fast, DisplayState::Results(_)));
        let html = surface.current();
        assert!(html.contains("Fast Book"));
        assert!(!html.contains("Slow Book"));
    }
}
