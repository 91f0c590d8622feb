//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::network::Network;
use crate::planner::{EstimateConfig, Graph, RouteFinder};

/// Shared application state.
///
/// Contains the read-only network snapshot and everything derived from it.
#[derive(Clone)]
pub struct AppState {
    /// Station and line dataset
    pub network: Arc<Network>,

    /// Connectivity graph, built once at startup
    pub graph: Arc<Graph>,

    /// Duration estimate constants
    pub config: Arc<EstimateConfig>,

    /// Memoised route lookups
    pub routes: Arc<RouteCache>,
}

impl AppState {
    /// Create a new app state, building the graph for `network`.
    pub fn new(network: Network, config: EstimateConfig, cache_config: &CacheConfig) -> Self {
        let graph = Graph::build(&network);
        Self {
            network: Arc::new(network),
            graph: Arc::new(graph),
            config: Arc::new(config),
            routes: Arc::new(RouteCache::new(cache_config)),
        }
    }

    /// A route finder over the shared network and graph.
    pub fn finder(&self) -> RouteFinder<'_> {
        RouteFinder::new(&self.network, &self.graph)
    }
}
