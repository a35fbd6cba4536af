//! Web layer for the next-bus finder.
//!
//! Serves the form page and handles field edits and find requests.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, Controller};
