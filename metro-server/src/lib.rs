//! Metro journey planner server.
//!
//! Plans shortest-hop journeys across a metro network, finds the station
//! nearest a live position, and estimates how long a journey takes.

pub mod cache;
pub mod domain;
pub mod geo_distance;
pub mod interchange;
pub mod network;
pub mod planner;
pub mod web;
