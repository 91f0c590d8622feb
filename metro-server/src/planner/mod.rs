//! Journey planner.
//!
//! This module implements the algorithmic core: building the station graph
//! from line topology and interchanges, finding shortest-hop routes with
//! breadth-first search, locating the nearest station to a live position,
//! and estimating how long a route takes.
//!
//! Everything here is synchronous and works on read-only snapshots, so it
//! can be called from any number of request handlers at once.

mod config;
mod duration;
mod graph;
mod nearest;
mod progress;
mod route;

pub use config::EstimateConfig;
pub use duration::{DurationBreakdown, JourneyEstimate, LineState, estimate_duration};
pub use graph::Graph;
pub use nearest::{Nearest, nearest_station};
pub use progress::{ArrivalNotice, ArrivalTracker, JourneyProgress};
pub use route::{Route, RouteFinder};
