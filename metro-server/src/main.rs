use std::net::SocketAddr;

use metro_server::cache::CacheConfig;
use metro_server::network::Network;
use metro_server::planner::EstimateConfig;
use metro_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Dataset used when METRO_DATASET is not set.
const DEFAULT_DATASET: &str = "data/delhi-metro.json";

/// Listen address used when METRO_ADDR is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the static network dataset (fail fast if unusable)
    let dataset = std::env::var("METRO_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string());
    let network = Network::load(&dataset).expect("Failed to load network dataset");

    let config = EstimateConfig::from_env();
    info!(
        average_speed_kmh = config.average_speed_kmh,
        dwell_secs = config.dwell_secs,
        interchange_penalty_secs = config.interchange_penalty_secs,
        line_change_penalty_secs = config.line_change_penalty_secs,
        "Estimate configuration"
    );

    // Build app state (graph is built once here)
    let state = AppState::new(network, config, &CacheConfig::default());
    info!(
        stations = state.network.len(),
        edges = state.graph.edge_count(),
        "Network graph ready"
    );

    let app = create_router(state);

    let addr: SocketAddr = std::env::var("METRO_ADDR")
        .ok()
        .and_then(|raw| {
            raw.parse::<SocketAddr>()
                .inspect_err(|e| warn!(value = %raw, error = %e, "Invalid METRO_ADDR, using default"))
                .ok()
        })
        .unwrap_or_else(|| DEFAULT_ADDR.parse().expect("default address is valid"));

    info!("Metro journey planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/lines             - Lines and their stations");
    info!("  GET  /api/stations/search   - Search stations by name");
    info!("  GET  /api/route             - Plan a route with duration estimate");
    info!("  POST /api/nearest           - Nearest station to a position");
    info!("  POST /api/journey/progress  - Progress along a route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
