//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{DepartureView, StationView};
use crate::service::LookupError;

use super::dto::ApiResponse;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let stations = Router::new()
        .route("/stations", get(list_stations))
        .route("/stations/:id", get(schedules_by_station));

    Router::new()
        .route("/health", get(health))
        .nest("/v1/api", stations)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StationView>>>, AppError> {
    let stations = state.stations.list_stations().await?;
    Ok(Json(ApiResponse::ok("Successfully get all station", stations)))
}

/// Upcoming departures from one station.
async fn schedules_by_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<DepartureView>>>, AppError> {
    let departures = state.stations.schedules_for(&id).await?;
    Ok(Json(ApiResponse::ok(
        "Successfully get schedule by station",
        departures,
    )))
}

/// Application error type.
///
/// Every lookup failure is reported as 400 with the error's own message,
/// whether the caller asked for an unknown station or the upstream broke.
/// Clients distinguish causes by `message`.
#[derive(Debug)]
pub struct AppError(LookupError);

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let message = self.0.to_string();

        warn!(%status, error = %message, "request failed");

        let body = Json(ApiResponse::<()>::error(message));
        (status, body).into_response()
    }
}
