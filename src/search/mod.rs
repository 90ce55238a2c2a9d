//! Search orchestration module
//!
//! Runs the query → lookup → render pipeline and writes its states to a
//! display surface.

mod executor;
mod surface;

pub use executor::Search;
pub use surface::{Surface, Ticket, WatchSurface};
