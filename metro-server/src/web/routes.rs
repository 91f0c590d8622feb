//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Position, Station, StationId};
use crate::planner::{JourneyProgress, Route, estimate_duration, nearest_station};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/stations/search", get(search_stations))
        .route("/api/route", get(plan_route))
        .route("/api/nearest", post(nearest))
        .route("/api/journey/progress", post(journey_progress))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state.network.lines().iter().map(LineResult::from_line).collect();
    Json(LinesResponse { lines })
}

/// Search stations by name or id.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let stations = state
        .network
        .search(&req.q, limit)
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Find a route and estimate its duration.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = find_route(&state, &req.from, &req.to).await?;
    let estimate = estimate_duration(&route, &state.config);

    Ok(Json(RouteResponse::from_route(&route, estimate.as_ref())))
}

/// Nearest station to a position, optionally restricted to given ids.
async fn nearest(State(state): State<AppState>, body: Bytes) -> Result<Json<NearestResponse>, AppError> {
    let req: NearestRequest = parse_body(&body)?;
    let position = parse_position(&req.position)?;

    let found = match &req.station_ids {
        Some(ids) => {
            let candidates: Vec<&Station> = ids
                .iter()
                .filter_map(|id| state.network.station_by_str(id))
                .collect();
            nearest_station(&position, candidates)
        }
        None => state.network.nearest_station(&position),
    };

    let nearest = found.ok_or_else(|| AppError::NotFound {
        message: "No station found".to_string(),
    })?;

    Ok(Json(NearestResponse::from_nearest(&nearest)))
}

/// Progress along the route between two stations.
async fn journey_progress(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProgressResponse>, AppError> {
    let req: ProgressRequest = parse_body(&body)?;
    let position = parse_position(&req.position)?;
    let route = find_route(&state, &req.from, &req.to).await?;

    let progress = JourneyProgress::locate(&route, &position).ok_or_else(|| AppError::NotFound {
        message: "No station found".to_string(),
    })?;

    Ok(Json(ProgressResponse::from_progress(&progress)))
}

/// Resolve two raw ids to a (cached) route.
async fn find_route(state: &AppState, from: &str, to: &str) -> Result<Arc<Route>, AppError> {
    let from_id = StationId::parse(from).map_err(|_| AppError::BadRequest {
        message: "Missing origin station".to_string(),
    })?;
    let to_id = StationId::parse(to).map_err(|_| AppError::BadRequest {
        message: "Missing destination station".to_string(),
    })?;

    let finder = state.finder();
    state
        .routes
        .route(&finder, &from_id, &to_id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route found between {from_id} and {to_id}"),
        })
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "Rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_position(value: &Value) -> Result<Position, AppError> {
    Position::from_json(value).ok_or_else(|| AppError::BadRequest {
        message: "Position needs numeric latitude and longitude".to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = status.as_u16(), %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
