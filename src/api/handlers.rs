//! HTTP request handlers for the rate query API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::RateSeries;
use crate::table::RateLookup;

use super::request::ValueQuery;
use super::response::{ApiError, ApiErrorResponse, RateListResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(list_rates_handler))
        .route("/rates/:name", get(series_handler))
        .route("/rates/:name/value", get(value_handler))
        .with_state(state)
}

/// Handler for GET /rates.
async fn list_rates_handler(State(state): State<AppState>) -> Json<RateListResponse> {
    let rates = state.table().names().map(str::to_string).collect();
    Json(RateListResponse { rates })
}

/// Handler for GET /rates/:name.
///
/// Returns the full series, including its history.
async fn series_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RateSeries>, ApiErrorResponse> {
    let series = state.table().get(&name).map_err(|err| {
        warn!(rate = %name, error = %err, "Series lookup failed");
        ApiErrorResponse::from(err)
    })?;
    Ok(Json(series.clone()))
}

/// Handler for GET /rates/:name/value.
///
/// Looks up the value of one rate as of the `date` query parameter,
/// decoding it when a `type` is given.
async fn value_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> Result<Json<RateLookup>, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let Query(query) = query.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Query string rejected"
        );
        ApiErrorResponse::bad_request(ApiError::invalid_query(rejection.body_text()))
    })?;

    info!(
        correlation_id = %correlation_id,
        rate = %name,
        date = %query.date,
        "Processing value lookup"
    );

    let lookup = query
        .expected_type()
        .and_then(|expected| state.table().lookup(&name, query.date.as_str(), expected))
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                rate = %name,
                error = %err,
                "Value lookup failed"
            );
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        rate = %name,
        value = %lookup.value,
        warnings = lookup.warnings.len(),
        "Value lookup completed"
    );
    Ok(Json(lookup))
}
