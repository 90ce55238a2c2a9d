//! Result types for search responses

mod types;

pub use types::*;
