//! Station connectivity graph.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::interchange::InterchangeGroups;
use crate::network::Network;

/// Undirected, unweighted adjacency between station records.
///
/// Edges come from two sources: consecutive stations along each line, and
/// every pair of records in an interchange complex. Neighbour lists keep
/// insertion order, which follows line declaration order, then station
/// order within each line, then interchange groups.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, Vec<StationId>>,
}

impl Graph {
    /// Build the graph for a network.
    ///
    /// Returns an empty graph when the network has no stations or no
    /// lines. A line hop that names an unknown station is skipped.
    pub fn build(network: &Network) -> Self {
        let mut graph = Self::default();
        if network.is_empty() || network.lines().is_empty() {
            debug!("Network has no stations or no lines, graph is empty");
            return graph;
        }

        for station in network.stations() {
            graph.adjacency.insert(station.id.clone(), Vec::new());
        }

        for line in network.lines() {
            for (a, b) in line.hops() {
                if !network.contains(a) || !network.contains(b) {
                    trace!(line = %line.id, from = %a, to = %b, "Skipping hop to unknown station");
                    continue;
                }
                graph.link(a, b);
            }
        }

        let interchanges = InterchangeGroups::from_stations(network.stations());
        for (a, b) in interchanges.pairs() {
            graph.link(a, b);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            interchanges = interchanges.len(),
            "Built network graph"
        );

        graph
    }

    /// Add an undirected edge. Self-edges and repeats are ignored.
    fn link(&mut self, a: &StationId, b: &StationId) {
        if a == b {
            return;
        }
        self.add_directed(a, b);
        self.add_directed(b, a);
    }

    fn add_directed(&mut self, from: &StationId, to: &StationId) {
        let neighbors = self.adjacency.entry(from.clone()).or_default();
        if !neighbors.contains(to) {
            neighbors.push(to.clone());
        }
    }

    /// Stations one hop from `id`, in insertion order.
    pub fn neighbors(&self, id: &StationId) -> &[StationId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if an edge joins `a` and `b`.
    pub fn are_adjacent(&self, a: &StationId, b: &StationId) -> bool {
        self.neighbors(a).contains(b)
    }

    /// True if `id` is a node of the graph.
    pub fn contains(&self, id: &StationId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, LineId, MetroLine, Station};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn station(id: &str, name: &str, line: &str) -> Station {
        Station::new(
            sid(id),
            name,
            Coordinates::new(28.6, 77.2).unwrap(),
            vec![LineId::parse(line).unwrap()],
        )
    }

    fn line(id: &str, stations: &[&str]) -> MetroLine {
        MetroLine::new(
            LineId::parse(id).unwrap(),
            id,
            "#000000",
            stations.iter().map(|s| sid(s)).collect(),
        )
    }

    fn neighbor_ids(graph: &Graph, id: &str) -> Vec<String> {
        graph.neighbors(&sid(id)).iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn consecutive_stations_are_linked_both_ways() {
        let network = Network::new(
            vec![station("A", "A", "L1"), station("B", "B", "L1"), station("C", "C", "L1")],
            vec![line("L1", &["A", "B", "C"])],
        );
        let graph = Graph::build(&network);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
        assert_eq!(neighbor_ids(&graph, "B"), vec!["A", "C"]);
        assert_eq!(neighbor_ids(&graph, "C"), vec!["B"]);
        assert!(!graph.are_adjacent(&sid("A"), &sid("C")));
    }

    #[test]
    fn interchange_links_without_shared_line() {
        let network = Network::new(
            vec![
                station("A", "A", "L1"),
                station("X1", "Central", "L1"),
                station("X2", "Central", "L2"),
                station("B", "B", "L2"),
            ],
            vec![line("L1", &["A", "X1"]), line("L2", &["X2", "B"])],
        );
        let graph = Graph::build(&network);

        assert!(graph.are_adjacent(&sid("X1"), &sid("X2")));
        assert!(graph.are_adjacent(&sid("X2"), &sid("X1")));
        assert_eq!(neighbor_ids(&graph, "X1"), vec!["A", "X2"]);
    }

    #[test]
    fn three_platform_interchange_is_a_clique() {
        let network = Network::new(
            vec![
                station("K1", "Kashmere Gate", "L1"),
                station("K2", "Kashmere Gate", "L2"),
                station("K3", "Kashmere Gate", "L3"),
            ],
            vec![line("L1", &["K1"]), line("L2", &["K2"]), line("L3", &["K3"])],
        );
        let graph = Graph::build(&network);

        assert_eq!(graph.edge_count(), 3);
        assert!(graph.are_adjacent(&sid("K1"), &sid("K3")));
        assert!(graph.are_adjacent(&sid("K2"), &sid("K3")));
    }

    #[test]
    fn unknown_station_hops_skipped() {
        let network = Network::new(
            vec![station("A", "A", "L1"), station("C", "C", "L1")],
            vec![line("L1", &["A", "GHOST", "C"])],
        );
        let graph = Graph::build(&network);

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains(&sid("GHOST")));
        assert!(graph.neighbors(&sid("A")).is_empty());
    }

    #[test]
    fn no_self_edges_or_duplicates() {
        // A line that loops back on itself and a second line repeating a hop
        let network = Network::new(
            vec![station("A", "A", "L1"), station("B", "B", "L1")],
            vec![line("L1", &["A", "A", "B"]), line("L2", &["B", "A"])],
        );
        let graph = Graph::build(&network);

        assert_eq!(neighbor_ids(&graph, "A"), vec!["B"]);
        assert_eq!(neighbor_ids(&graph, "B"), vec!["A"]);
    }

    #[test]
    fn empty_inputs_give_empty_graph() {
        assert!(Graph::build(&Network::default()).is_empty());

        let no_lines = Network::new(vec![station("A", "A", "L1")], vec![]);
        assert!(Graph::build(&no_lines).is_empty());
    }

    #[test]
    fn isolated_station_is_a_node() {
        let network = Network::new(
            vec![station("A", "A", "L1"), station("B", "B", "L1"), station("Z", "Z", "L9")],
            vec![line("L1", &["A", "B"])],
        );
        let graph = Graph::build(&network);

        assert!(graph.contains(&sid("Z")));
        assert!(graph.neighbors(&sid("Z")).is_empty());
    }
}
