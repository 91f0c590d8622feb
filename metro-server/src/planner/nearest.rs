//! Nearest-station lookup.
//!
//! A linear scan over a candidate set. The same scan serves the whole
//! network (where am I?) and a single route (how far along am I?), so both
//! use one distance metric and their answers are comparable.

use crate::domain::{Position, Station};
use crate::geo_distance::distance_meters;
use crate::network::Network;

use super::route::Route;

/// The closest candidate to a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub station: &'a Station,

    /// Index of the station in the candidate iteration order.
    pub index: usize,

    /// Great-circle distance from the position, in metres.
    pub distance_meters: f64,
}

/// Find the candidate closest to `position`.
///
/// Returns `None` only when there are no candidates. On a tie the first
/// candidate encountered wins.
pub fn nearest_station<'a>(
    position: &Position,
    candidates: impl IntoIterator<Item = &'a Station>,
) -> Option<Nearest<'a>> {
    let mut best: Option<Nearest<'a>> = None;

    for (index, station) in candidates.into_iter().enumerate() {
        let distance = distance_meters(position.coordinates, station.coordinates);
        if best.is_none_or(|b| distance < b.distance_meters) {
            best = Some(Nearest {
                station,
                index,
                distance_meters: distance,
            });
        }
    }

    best
}

impl Network {
    /// Nearest station anywhere on the network.
    pub fn nearest_station(&self, position: &Position) -> Option<Nearest<'_>> {
        nearest_station(position, self.stations())
    }
}

impl Route {
    /// Nearest station on this route; `index` is the route position.
    pub fn nearest_station(&self, position: &Position) -> Option<Nearest<'_>> {
        nearest_station(position, self.stations())
    }
}
