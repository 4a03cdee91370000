//! HTTP API module for the rate table.
//!
//! This module provides read-only REST endpoints for listing rates,
//! inspecting a rate's history, and looking up a value as of a month.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{UNTYPED, ValueQuery};
pub use response::{ApiError, ApiErrorResponse, RateListResponse};
pub use state::AppState;
