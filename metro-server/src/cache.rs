//! Caching layer for route lookups.
//!
//! Routes depend only on the static dataset, so a cached answer never goes
//! stale; the TTL and capacity only bound memory. Misses (no route) are
//! cached too.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::StationId;
use crate::planner::{Route, RouteFinder};

/// Cache key: (origin, destination).
type RouteKey = (StationId, StationId);

/// Cached route entry; `None` records that no route exists.
type RouteEntry = Option<Arc<Route>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Memoised route lookups.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get the route between two stations, searching on a miss.
    pub async fn route(&self, finder: &RouteFinder<'_>, from: &StationId, to: &StationId) -> RouteEntry {
        let key = (from.clone(), to.clone());

        if let Some(hit) = self.routes.get(&key).await {
            trace!(%from, %to, "Route cache hit");
            return hit;
        }

        let found = finder.find_route_between(from, to).map(Arc::new);
        self.routes.insert(key, found.clone()).await;
        found
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
