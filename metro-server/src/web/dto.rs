//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{MetroLine, Station};
use crate::planner::{JourneyEstimate, JourneyProgress, Nearest, Route};

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search text (empty lists every station)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub lines: Vec<String>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line in responses.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Station ids in line order
    pub stations: Vec<String>,
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

/// A duration estimate with its breakdown.
#[derive(Debug, Serialize)]
pub struct EstimateResult {
    pub total_seconds: f64,
    pub total_minutes: i64,
    pub distance_meters: f64,
    pub running_seconds: f64,
    pub stops: usize,
    pub dwell_seconds: f64,
    pub interchanges: usize,
    pub transfer_seconds: f64,
    pub line_changes: usize,
    pub line_change_seconds: f64,
}

/// Response for a route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations from origin to destination
    pub stations: Vec<StationResult>,

    /// Number of hops
    pub hops: usize,

    /// Absent when origin and destination are the same station
    pub estimate: Option<EstimateResult>,
}

/// Request for the nearest station to a position.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    /// Position in any accepted shape (see `Position::from_json`)
    pub position: Value,

    /// Restrict the search to these station ids
    pub station_ids: Option<Vec<String>>,
}

/// Response for a nearest-station request.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub station: StationResult,
    pub distance_meters: f64,
}

/// Request for progress along a journey.
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub from: String,
    pub to: String,
    pub position: Value,
}

/// Response describing progress along a journey.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub current: StationResult,

    /// Index of the current station in the route
    pub index: usize,

    pub previous: Option<StationResult>,
    pub next: Option<StationResult>,

    /// True once the closest station is the destination
    pub finished: bool,

    pub remaining_stops: usize,
    pub distance_meters: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            lat: station.coordinates.lat,
            lng: station.coordinates.lng,
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl LineResult {
    /// Create from a domain MetroLine.
    pub fn from_line(line: &MetroLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            color: line.color.clone(),
            stations: line.stations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EstimateResult {
    /// Create from a journey estimate.
    pub fn from_estimate(estimate: &JourneyEstimate) -> Self {
        let b = &estimate.breakdown;
        Self {
            total_seconds: estimate.total_seconds,
            total_minutes: estimate.total_minutes(),
            distance_meters: b.distance_meters,
            running_seconds: b.running_seconds,
            stops: b.stop_count,
            dwell_seconds: b.dwell_seconds,
            interchanges: b.interchange_count,
            transfer_seconds: b.transfer_seconds,
            line_changes: b.line_change_count,
            line_change_seconds: b.line_change_seconds,
        }
    }
}

impl RouteResponse {
    /// Create from a route and its estimate.
    pub fn from_route(route: &Route, estimate: Option<&JourneyEstimate>) -> Self {
        Self {
            stations: route.stations().iter().map(StationResult::from_station).collect(),
            hops: route.hop_count(),
            estimate: estimate.map(EstimateResult::from_estimate),
        }
    }
}

impl NearestResponse {
    /// Create from a nearest-station result.
    pub fn from_nearest(nearest: &Nearest<'_>) -> Self {
        Self {
            station: StationResult::from_station(nearest.station),
            distance_meters: nearest.distance_meters,
        }
    }
}

impl ProgressResponse {
    /// Create from journey progress.
    pub fn from_progress(progress: &JourneyProgress<'_>) -> Self {
        Self {
            current: StationResult::from_station(progress.current),
            index: progress.index,
            previous: progress.previous.map(StationResult::from_station),
            next: progress.next.map(StationResult::from_station),
            finished: progress.is_finished(),
            remaining_stops: progress.remaining_stops(),
            distance_meters: progress.distance_meters,
        }
    }
}
