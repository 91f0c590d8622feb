//! The immutable station/line snapshot.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{LineId, MetroLine, Station, StationId};

/// Stations and lines of a metro network.
///
/// Built once at startup and shared read-only. Declaration order of both
/// stations and lines is preserved; it decides BFS tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    lines: Vec<MetroLine>,
}

impl Network {
    /// Create a network from station and line records.
    ///
    /// A station id that appears more than once keeps its first record.
    pub fn new(stations: Vec<Station>, lines: Vec<MetroLine>) -> Self {
        let mut kept = Vec::with_capacity(stations.len());
        let mut index = HashMap::with_capacity(stations.len());

        for station in stations {
            if index.contains_key(&station.id) {
                warn!(station = %station.id, "Duplicate station id, keeping first record");
                continue;
            }
            index.insert(station.id.clone(), kept.len());
            kept.push(station);
        }

        Self {
            stations: kept,
            index,
            lines,
        }
    }

    /// Look up a station record by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.station_by_str(id.as_str())
    }

    /// Look up a station record by raw id string.
    ///
    /// Surrounding whitespace is ignored; a blank id finds nothing.
    pub fn station_by_str(&self, id: &str) -> Option<&Station> {
        self.index.get(id.trim()).map(|&i| &self.stations[i])
    }

    /// True if a record exists for `id`.
    pub fn contains(&self, id: &StationId) -> bool {
        self.index.contains_key(id)
    }

    /// All station records in declaration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines in declaration order.
    pub fn lines(&self) -> &[MetroLine] {
        &self.lines
    }

    /// Look up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&MetroLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Returns the number of station records.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no station records.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
