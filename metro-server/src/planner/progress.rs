//! Progress along an active journey.
//!
//! [`JourneyProgress`] snaps a live position to the closest station on the
//! route. [`ArrivalTracker`] turns a stream of those snapshots into one
//! notice per newly reached station, for whoever delivers notifications.

use crate::domain::{Position, Station, StationId};

use super::route::Route;

/// Where a position falls along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneyProgress<'a> {
    pub current: &'a Station,

    /// Index of `current` in the route.
    pub index: usize,

    pub previous: Option<&'a Station>,
    pub next: Option<&'a Station>,

    /// Distance from the position to `current`, in metres.
    pub distance_meters: f64,

    route_len: usize,
}

impl<'a> JourneyProgress<'a> {
    /// Locate `position` on `route`.
    ///
    /// Returns `None` for an empty route.
    pub fn locate(route: &'a Route, position: &Position) -> Option<Self> {
        let nearest = route.nearest_station(position)?;
        Some(Self::at_index(route, nearest.index, nearest.distance_meters))
    }

    fn at_index(route: &'a Route, index: usize, distance_meters: f64) -> Self {
        let stations = route.stations();
        Self {
            current: &stations[index],
            index,
            previous: index.checked_sub(1).and_then(|i| stations.get(i)),
            next: stations.get(index + 1),
            distance_meters,
            route_len: stations.len(),
        }
    }

    /// True once the closest route station is the destination.
    pub fn is_finished(&self) -> bool {
        self.index + 1 == self.route_len
    }

    /// Stops left before the destination.
    pub fn remaining_stops(&self) -> usize {
        self.route_len - 1 - self.index
    }

    /// True if the station at `index` has been reached or passed.
    pub fn has_visited(&self, index: usize) -> bool {
        index <= self.index
    }
}

/// A newly reached station, handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalNotice {
    pub station: Station,
    pub index: usize,
    /// `None` at the origin.
    pub previous: Option<Station>,
    /// `None` at the destination.
    pub next: Option<Station>,
}

impl ArrivalNotice {
    pub fn is_destination(&self) -> bool {
        self.next.is_none()
    }
}

/// Remembers the last reported station so each arrival is reported once.
#[derive(Debug, Clone, Default)]
pub struct ArrivalTracker {
    last_notified: Option<StationId>,
}

impl ArrivalTracker {
    /// Create a tracker that has reported nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current closest station.
    ///
    /// Returns a notice when `current` differs from the last observed
    /// station and lies on the route. The observed station is remembered
    /// even when it is off the route, so wandering off and back on reports
    /// the return.
    pub fn observe(&mut self, route: &Route, current: &Station) -> Option<ArrivalNotice> {
        if self.last_notified.as_ref() == Some(&current.id) {
            return None;
        }
        self.last_notified = Some(current.id.clone());

        let index = route.position_of(&current.id)?;
        let progress = JourneyProgress::at_index(route, index, 0.0);

        Some(ArrivalNotice {
            station: progress.current.clone(),
            index,
            previous: progress.previous.cloned(),
            next: progress.next.cloned(),
        })
    }

    /// Forget the last station, e.g. when a journey ends.
    pub fn reset(&mut self) {
        self.last_notified = None;
    }

    pub fn last_notified(&self) -> Option<&StationId> {
        self.last_notified.as_ref()
    }
}
