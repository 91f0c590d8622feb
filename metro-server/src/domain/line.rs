//! Metro line types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::station::StationId;

/// Identifier of a metro line (e.g. "blue", "L1").
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLineId(s.to_string()));
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LineId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LineId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A metro line: an ordered run of station records.
///
/// Consecutive entries in `stations` are one hop apart. The list may name
/// ids that have no station record; those hops are skipped when the graph
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetroLine {
    pub id: LineId,
    pub name: String,
    /// Render colour, passed through untouched (e.g. "#0000FF").
    pub color: String,
    pub stations: Vec<StationId>,
}

impl MetroLine {
    /// Create a line.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>, stations: Vec<StationId>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            stations,
        }
    }

    /// Consecutive station pairs along the line.
    pub fn hops(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn parse_line_id() {
        assert_eq!(LineId::parse(" blue ").unwrap().as_str(), "blue");
        assert!(LineId::parse("").is_err());
    }

    #[test]
    fn hops_follow_declaration_order() {
        let line = MetroLine::new(
            LineId::parse("L1").unwrap(),
            "Line 1",
            "#f00",
            vec![sid("A"), sid("B"), sid("C")],
        );
        let hops: Vec<_> = line.hops().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(hops, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn single_station_line_has_no_hops() {
        let line = MetroLine::new(LineId::parse("L1").unwrap(), "Line 1", "#f00", vec![sid("A")]);
        assert_eq!(line.hops().count(), 0);
    }
}
