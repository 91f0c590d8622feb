//! Shortest-hop route finding.
//!
//! Plain breadth-first search over the station graph. Nodes are marked
//! visited when enqueued, and each visited node remembers the node it was
//! reached from, so the path is rebuilt once the destination is dequeued.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::domain::{Station, StationId};
use crate::network::Network;

use super::graph::Graph;

/// An ordered run of stations from origin to destination, inclusive.
///
/// Routes found by [`RouteFinder`] have the minimum hop count. They are not
/// guaranteed to be the shortest in distance, time, or line changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Route {
    stations: Vec<Station>,
}

impl Route {
    /// Create a route from an ordered list of stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// The stations, origin first.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the number of stations, endpoints included.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the route has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Index of the station with `id`, if it is on the route.
    pub fn position_of(&self, id: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| &s.id == id)
    }

    /// Consecutive station pairs, origin first.
    pub fn pairs(&self) -> impl Iterator<Item = (&Station, &Station)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Station ids in route order.
    pub fn ids(&self) -> impl Iterator<Item = &StationId> {
        self.stations.iter().map(|s| &s.id)
    }
}

impl From<Vec<Station>> for Route {
    fn from(stations: Vec<Station>) -> Self {
        Self::new(stations)
    }
}

/// Route finder over a network and its graph.
pub struct RouteFinder<'a> {
    network: &'a Network,
    graph: &'a Graph,
}

impl<'a> RouteFinder<'a> {
    /// Create a new route finder.
    pub fn new(network: &'a Network, graph: &'a Graph) -> Self {
        Self { network, graph }
    }

    /// Find a shortest-hop route between two raw station ids.
    ///
    /// Returns `None` when either id is blank or unknown, or when the
    /// destination cannot be reached. Asking for a route from a station to
    /// itself returns that single station.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Route> {
        let start = self.network.station_by_str(from)?;
        let end = self.network.station_by_str(to)?;
        self.search(start, end)
    }

    /// Find a shortest-hop route between two station ids.
    pub fn find_route_between(&self, from: &StationId, to: &StationId) -> Option<Route> {
        let start = self.network.station(from)?;
        let end = self.network.station(to)?;
        self.search(start, end)
    }

    fn search(&self, start: &'a Station, end: &'a Station) -> Option<Route> {
        let mut came_from: HashMap<&'a StationId, &'a StationId> = HashMap::new();
        let mut visited: HashSet<&'a StationId> = HashSet::from([&start.id]);
        let mut queue: VecDeque<&'a StationId> = VecDeque::from([&start.id]);
        let mut expanded = 0usize;

        while let Some(current) = queue.pop_front() {
            expanded += 1;

            if current == &end.id {
                debug!(from = %start.id, to = %end.id, expanded, "Route found");
                return self.rebuild(&came_from, current);
            }

            for next in self.graph.neighbors(current) {
                if visited.insert(next) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        debug!(from = %start.id, to = %end.id, expanded, "No route found");
        None
    }

    /// Walk back from `end` to the origin and resolve full station records.
    fn rebuild(&self, came_from: &HashMap<&StationId, &StationId>, end: &StationId) -> Option<Route> {
        let mut ids = vec![end];
        let mut current = end;
        while let Some(&prev) = came_from.get(current) {
            ids.push(prev);
            current = prev;
        }
        ids.reverse();

        ids.into_iter()
            .map(|id| self.network.station(id).cloned())
            .collect::<Option<Vec<_>>>()
            .map(Route::new)
    }
}
