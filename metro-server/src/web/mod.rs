//! Web layer for the metro journey planner.
//!
//! Provides JSON endpoints for station lookup, route planning, and live
//! journey progress.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
