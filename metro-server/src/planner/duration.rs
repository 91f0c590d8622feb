//! Journey duration estimates.
//!
//! The estimate is a sum of four independent terms: running time over the
//! great-circle distance, dwell time per stop, a walking penalty per
//! interchange, and a penalty per change of line.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{LineId, Station};
use crate::geo_distance::distance_meters;

use super::config::EstimateConfig;
use super::route::Route;

/// Line continuity carried along a route, one station pair at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineState {
    /// Line inferred for the last segment, if any.
    pub current_line: Option<LineId>,
    pub line_changes: usize,
}

impl LineState {
    /// Fold one station pair into the state.
    ///
    /// The segment's line is one serving both stations, preferring the
    /// current line when it qualifies. A different line counts as a change.
    /// So does a pair with no common line (a walk between platforms), which
    /// also clears the current line; the next segment then starts afresh
    /// without counting again.
    pub fn advance(self, from: &Station, to: &Station) -> Self {
        let mut common = from.common_lines(to).peekable();

        let Some(&first) = common.peek() else {
            return Self {
                current_line: None,
                line_changes: self.line_changes + 1,
            };
        };

        let Some(current) = self.current_line else {
            return Self {
                current_line: Some(first.clone()),
                line_changes: self.line_changes,
            };
        };

        if common.any(|l| l == &current) {
            Self {
                current_line: Some(current),
                line_changes: self.line_changes,
            }
        } else {
            Self {
                current_line: Some(first.clone()),
                line_changes: self.line_changes + 1,
            }
        }
    }
}

/// The additive terms of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationBreakdown {
    /// Total great-circle distance along the route (metres).
    pub distance_meters: f64,
    pub running_seconds: f64,

    /// Stops counted for dwell: one per hop.
    pub stop_count: usize,
    pub dwell_seconds: f64,

    pub interchange_count: usize,
    pub transfer_seconds: f64,

    pub line_change_count: usize,
    pub line_change_seconds: f64,
}

/// Estimated journey time for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyEstimate {
    pub total_seconds: f64,
    pub breakdown: DurationBreakdown,
}

impl JourneyEstimate {
    /// Total time, rounded to the nearest second.
    pub fn total(&self) -> Duration {
        Duration::seconds(self.total_seconds.round() as i64)
    }

    /// Total time in whole minutes, rounded up.
    pub fn total_minutes(&self) -> i64 {
        (self.total_seconds / 60.0).ceil() as i64
    }
}

/// Estimate how long a route takes.
///
/// Returns `None` for routes with fewer than two stations.
pub fn estimate_duration(route: &Route, config: &EstimateConfig) -> Option<JourneyEstimate> {
    if route.len() < 2 {
        return None;
    }

    let distance: f64 = route
        .pairs()
        .map(|(a, b)| distance_meters(a.coordinates, b.coordinates))
        .sum();
    let interchanges = route.pairs().filter(|(a, b)| a.is_interchange_with(b)).count();
    let lines = route
        .pairs()
        .fold(LineState::default(), |state, (a, b)| state.advance(a, b));
    let stops = route.hop_count();

    let running_seconds = distance / config.average_speed_mps();
    let dwell_seconds = f64::from(config.dwell_secs) * stops as f64;
    let transfer_seconds = f64::from(config.interchange_penalty_secs) * interchanges as f64;
    let line_change_seconds = f64::from(config.line_change_penalty_secs) * lines.line_changes as f64;

    Some(JourneyEstimate {
        total_seconds: running_seconds + dwell_seconds + transfer_seconds + line_change_seconds,
        breakdown: DurationBreakdown {
            distance_meters: distance,
            running_seconds,
            stop_count: stops,
            dwell_seconds,
            interchange_count: interchanges,
            transfer_seconds,
            line_change_count: lines.line_changes,
            line_change_seconds,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, StationId};

    fn station(id: &str, name: &str, lat: f64, lng: f64, lines: &[&str]) -> Station {
        Station::new(
            StationId::parse(id).unwrap(),
            name,
            Coordinates::new(lat, lng).unwrap(),
            lines.iter().map(|l| LineId::parse(l).unwrap()).collect(),
        )
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn too_short_routes() {
        let config = EstimateConfig::default();
        assert!(estimate_duration(&Route::new(vec![]), &config).is_none());

        let single = Route::new(vec![station("A", "A", 28.6, 77.2, &["L1"])]);
        assert!(estimate_duration(&single, &config).is_none());
    }

    #[test]
    fn single_hop() {
        let a = station("A", "A", 28.60, 77.20, &["L1"]);
        let b = station("B", "B", 28.61, 77.20, &["L1"]);
        let d = distance_meters(a.coordinates, b.coordinates);
        let route = Route::new(vec![a, b]);

        let estimate = estimate_duration(&route, &EstimateConfig::default()).unwrap();
        let bd = &estimate.breakdown;

        assert_eq!(bd.stop_count, 1);
        assert_eq!(bd.dwell_seconds, 20.0);
        assert_eq!(bd.transfer_seconds, 0.0);
        assert_eq!(bd.line_change_seconds, 0.0);
        assert!(approx(bd.running_seconds, d / 12.5));
        assert!(approx(estimate.total_seconds, bd.running_seconds + bd.dwell_seconds));
    }

    #[test]
    fn three_stations_on_one_line() {
        let a = station("A", "A", 28.60, 77.20, &["L1"]);
        let b = station("B", "B", 28.61, 77.20, &["L1"]);
        let c = station("C", "C", 28.62, 77.20, &["L1"]);
        let d = distance_meters(a.coordinates, b.coordinates) + distance_meters(b.coordinates, c.coordinates);
        let route = Route::new(vec![a, b, c]);

        let estimate = estimate_duration(&route, &EstimateConfig::default()).unwrap();
        let bd = &estimate.breakdown;

        assert_eq!(bd.line_change_count, 0);
        assert_eq!(bd.interchange_count, 0);
        assert_eq!(bd.transfer_seconds, 0.0);
        assert_eq!(bd.dwell_seconds, 40.0);
        assert!(approx(bd.distance_meters, d));
        // ~2.2 km at 45 km/h is just under three minutes
        assert!(approx(bd.running_seconds, d / 12.5));
        assert!((170.0..185.0).contains(&bd.running_seconds));
        assert_eq!(estimate.total_minutes(), 4);
    }

    #[test]
    fn interchange_counts_transfer_and_line_change() {
        let route = Route::new(vec![
            station("A", "West", 28.60, 77.18, &["L1"]),
            station("X1", "Central", 28.60, 77.20, &["L1"]),
            station("X2", "Central", 28.60, 77.20, &["L2"]),
            station("B", "East", 28.60, 77.22, &["L2"]),
        ]);

        let estimate = estimate_duration(&route, &EstimateConfig::default()).unwrap();
        let bd = &estimate.breakdown;

        assert_eq!(bd.interchange_count, 1);
        assert_eq!(bd.transfer_seconds, 120.0);
        assert_eq!(bd.line_change_count, 1);
        assert_eq!(bd.line_change_seconds, 600.0);
        assert_eq!(bd.stop_count, 3);
        assert!(approx(
            estimate.total_seconds,
            bd.running_seconds + 60.0 + 120.0 + 600.0
        ));
    }

    #[test]
    fn change_at_shared_platform() {
        // B serves both lines; no walk but the train changes
        let route = Route::new(vec![
            station("A", "A", 0.0, 0.00, &["L1"]),
            station("B", "B", 0.0, 0.01, &["L1", "L2"]),
            station("C", "C", 0.0, 0.02, &["L2"]),
        ]);

        let bd = estimate_duration(&route, &EstimateConfig::default()).unwrap().breakdown;
        assert_eq!(bd.interchange_count, 0);
        assert_eq!(bd.line_change_count, 1);
    }

    #[test]
    fn custom_constants() {
        let route = Route::new(vec![
            station("A", "A", 0.0, 0.0, &["L1"]),
            station("B", "B", 0.0, 0.0, &["L1"]),
        ]);
        let config = EstimateConfig::new(36.0, 30, 90, 300);

        let estimate = estimate_duration(&route, &config).unwrap();
        assert_eq!(estimate.breakdown.running_seconds, 0.0);
        assert_eq!(estimate.total_seconds, 30.0);
        assert_eq!(estimate.total(), Duration::seconds(30));
    }

    #[test]
    fn line_state_starts_from_first_common_line() {
        let a = station("A", "A", 0.0, 0.0, &["L2", "L1"]);
        let b = station("B", "B", 0.0, 0.0, &["L1", "L2"]);

        let state = LineState::default().advance(&a, &b);
        assert_eq!(state.current_line, Some(line("L2")));
        assert_eq!(state.line_changes, 0);
    }

    #[test]
    fn line_state_prefers_continuity() {
        let a = station("A", "A", 0.0, 0.0, &["L2", "L1"]);
        let b = station("B", "B", 0.0, 0.0, &["L2", "L1"]);
        let state = LineState {
            current_line: Some(line("L1")),
            line_changes: 0,
        };

        let next = state.advance(&a, &b);
        assert_eq!(next.current_line, Some(line("L1")));
        assert_eq!(next.line_changes, 0);
    }

    #[test]
    fn line_state_counts_switch() {
        let a = station("A", "A", 0.0, 0.0, &["L2"]);
        let b = station("B", "B", 0.0, 0.0, &["L2"]);
        let state = LineState {
            current_line: Some(line("L1")),
            line_changes: 2,
        };

        let next = state.advance(&a, &b);
        assert_eq!(next.current_line, Some(line("L2")));
        assert_eq!(next.line_changes, 3);
    }

    #[test]
    fn line_state_clears_on_walk() {
        let a = station("X1", "Central", 0.0, 0.0, &["L1"]);
        let b = station("X2", "Central", 0.0, 0.0, &["L2"]);
        let state = LineState {
            current_line: Some(line("L1")),
            line_changes: 0,
        };

        let walked = state.advance(&a, &b);
        assert_eq!(walked.current_line, None);
        assert_eq!(walked.line_changes, 1);

        // The next segment picks up a line without counting again
        let c = station("C", "C", 0.0, 0.0, &["L2"]);
        let boarded = walked.advance(&b, &c);
        assert_eq!(boarded.current_line, Some(line("L2")));
        assert_eq!(boarded.line_changes, 1);
    }
}
