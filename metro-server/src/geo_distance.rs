//! Great-circle distance between coordinates.
//!
//! Every distance in the crate goes through [`distance_meters`], so the
//! global and route-scoped nearest-station lookups and the duration
//! estimate all agree on the metric.

use geo::{Distance, Haversine, Point};

use crate::domain::Coordinates;

/// Haversine distance in metres between two coordinates.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Coordinates;
/// use metro_server::geo_distance::distance_meters;
///
/// let a = Coordinates::new(28.60, 77.20).unwrap();
/// let b = Coordinates::new(28.61, 77.20).unwrap();
/// let d = distance_meters(a, b);
/// assert!((d - 1112.0).abs() < 5.0);
/// assert_eq!(distance_meters(a, a), 0.0);
/// ```
pub fn distance_meters(from: Coordinates, to: Coordinates) -> f64 {
    Haversine.distance(to_point(from), to_point(to))
}

fn to_point(c: Coordinates) -> Point<f64> {
    Point::new(c.lng, c.lat)
}
