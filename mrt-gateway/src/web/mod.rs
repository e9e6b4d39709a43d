//! Web layer for the MRT gateway.
//!
//! Serves the station list and per-station departures under `/v1/api`.

mod dto;
mod routes;
mod state;

pub use dto::ApiResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
