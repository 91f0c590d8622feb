//! Station identifier and station record types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::line::LineId;

/// Identifier of a single platform-on-a-line.
///
/// Several `StationId`s can belong to one physical complex; those records
/// share a display name (see [`Station::is_interchange_with`]). Identifiers
/// are non-empty and carry no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let id = StationId::parse("rajiv_chowk_blue").unwrap();
/// assert_eq!(id.as_str(), "rajiv_chowk_blue");
///
/// // Blank identifiers are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidStationId(s.to_string()));
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StationId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate { lat, lng });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

/// A station record: one platform of one physical complex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,

    /// Display name, shared by every record at the same physical location.
    pub name: String,

    pub coordinates: Coordinates,

    /// Lines serving this record, in declaration order.
    pub lines: Vec<LineId>,
}

impl Station {
    /// Create a station record.
    pub fn new(id: StationId, name: impl Into<String>, coordinates: Coordinates, lines: Vec<LineId>) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
            lines,
        }
    }

    /// True if `other` is a different record of the same physical complex.
    ///
    /// The name comparison is exact and case-sensitive.
    pub fn is_interchange_with(&self, other: &Station) -> bool {
        self.name == other.name && self.id != other.id
    }

    /// True if `line` serves this record.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }

    /// Lines serving both this record and `other`, in this record's order.
    pub fn common_lines<'a>(&'a self, other: &'a Station) -> impl Iterator<Item = &'a LineId> + 'a {
        self.lines.iter().filter(move |line| other.serves(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn station(id: &str, name: &str, lines: &[&str]) -> Station {
        Station::new(
            StationId::parse(id).unwrap(),
            name,
            Coordinates::new(28.6, 77.2).unwrap(),
            lines.iter().map(|l| line(l)).collect(),
        )
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = StationId::parse("  X1 ").unwrap();
        assert_eq!(id.as_str(), "X1");
    }

    #[test]
    fn reject_blank_ids() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("\t\n").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("X1").unwrap();
        assert_eq!(format!("{}", id), "X1");
        assert_eq!(format!("{:?}", id), "StationId(X1)");
    }

    #[test]
    fn deserialize_validates() {
        let id: StationId = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(id.as_str(), "A");
        assert!(serde_json::from_str::<StationId>("\"  \"").is_err());
    }

    #[test]
    fn coordinates_range_checked() {
        assert!(Coordinates::new(28.6, 77.2).is_ok());
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
        assert!(Coordinates::new(90.5, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn interchange_requires_same_name_different_id() {
        let x1 = station("X1", "Central", &["L1"]);
        let x2 = station("X2", "Central", &["L2"]);
        let y = station("Y", "Other", &["L1"]);

        assert!(x1.is_interchange_with(&x2));
        assert!(x2.is_interchange_with(&x1));
        assert!(!x1.is_interchange_with(&x1));
        assert!(!x1.is_interchange_with(&y));
    }

    #[test]
    fn interchange_name_match_is_case_sensitive() {
        let a = station("A", "Central", &["L1"]);
        let b = station("B", "central", &["L2"]);
        assert!(!a.is_interchange_with(&b));
    }

    #[test]
    fn common_lines_in_own_order() {
        let a = station("A", "A", &["L3", "L1", "L2"]);
        let b = station("B", "B", &["L2", "L3"]);
        let common: Vec<_> = a.common_lines(&b).map(|l| l.as_str()).collect();
        assert_eq!(common, vec!["L3", "L2"]);
    }
}
