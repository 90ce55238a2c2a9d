//! Search engine module
//!
//! Defines the Engine trait and the Open Library backend.

mod traits;

pub mod openlibrary;

pub use openlibrary::OpenLibrary;
pub use traits::*;
