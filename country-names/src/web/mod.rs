//! Web layer for the country name service.
//!
//! Provides HTTP endpoints for listing countries and resolving codes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
