//! Web layer for the BahnPulse journey planner.
//!
//! Provides the search pages and the JSON/HTML endpoints for connections,
//! departure boards and station lookup.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
