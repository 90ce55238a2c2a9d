//! Web server module
//!
//! Serves the search page, the live results stream and a JSON format.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
