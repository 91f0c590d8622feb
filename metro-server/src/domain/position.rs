//! Live position samples.
//!
//! Positions arrive from a platform geolocation service in a handful of
//! shapes. [`Position::from_json`] accepts all of them and drops anything
//! it cannot turn into a finite, in-range coordinate.

use serde::Serialize;
use serde_json::Value;

use super::station::Coordinates;

/// A single position snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub coordinates: Coordinates,

    /// Reported accuracy radius in metres, if the source gave one.
    pub accuracy: Option<f64>,
}

impl Position {
    /// Create a position without accuracy information.
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            accuracy: None,
        }
    }

    /// Coerce a loosely-shaped JSON value into a position.
    ///
    /// Accepted shapes, with numbers or numeric strings:
    /// - `{ "lat": .., "lng": .. }`
    /// - `{ "latitude": .., "longitude": .. }`
    /// - `{ "coords": { "latitude": .., "longitude": .., "accuracy": .. }, .. }`
    ///
    /// Extra fields are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::Position;
    /// use serde_json::json;
    ///
    /// let p = Position::from_json(&json!({
    ///     "coords": { "latitude": "28.6", "longitude": 77.2, "accuracy": 12 },
    ///     "timestamp": 1700000000
    /// }))
    /// .unwrap();
    /// assert_eq!(p.coordinates.lat, 28.6);
    /// assert_eq!(p.accuracy, Some(12.0));
    ///
    /// assert!(Position::from_json(&json!({ "lat": "north", "lng": 77.2 })).is_none());
    /// ```
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        if let Some(coords) = obj.get("coords") {
            return Self::from_json(coords);
        }

        let lat = obj.get("latitude").or_else(|| obj.get("lat")).and_then(coerce_number)?;
        let lng = obj
            .get("longitude")
            .or_else(|| obj.get("lng"))
            .or_else(|| obj.get("lon"))
            .and_then(coerce_number)?;

        let coordinates = Coordinates::new(lat, lng).ok()?;
        let accuracy = obj
            .get("accuracy")
            .and_then(coerce_number)
            .filter(|a| a.is_finite() && *a >= 0.0);

        Some(Self {
            coordinates,
            accuracy,
        })
    }
}

impl From<Coordinates> for Position {
    fn from(coordinates: Coordinates) -> Self {
        Self::new(coordinates)
    }
}

/// Read a JSON number or numeric string as `f64`.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
