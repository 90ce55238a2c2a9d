//! Rendering of search outcomes
//!
//! A [`DisplayState`] is turned into the complete replacement content of the
//! results area. Writing that content somewhere is the caller's job.

mod card;
mod state;
mod templates;

pub use card::*;
pub use state::*;
pub use templates::Templates;
