//! Dataset loading from JSON.
//!
//! The dataset is static configuration that the planner does not own, so
//! loading is lenient: a record that cannot be made valid is skipped with a
//! warning instead of failing the whole load. Only I/O failures, broken
//! JSON, and a dataset with no usable stations are errors.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{Coordinates, LineId, MetroLine, Station, StationId, coerce_number};

use super::dataset::Network;
use super::error::NetworkError;

#[derive(Debug, Deserialize)]
struct DatasetDto {
    #[serde(default)]
    stations: Vec<StationDto>,
    #[serde(default)]
    lines: Vec<LineDto>,
}

#[derive(Debug, Deserialize)]
struct StationDto {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    coordinates: Value,
    #[serde(default)]
    lines: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LineDto {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    stations: Vec<String>,
}

impl Network {
    /// Load a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_reader(std::io::BufReader::new(file))?;
        info!(
            path = %path.display(),
            stations = network.len(),
            lines = network.lines().len(),
            "Loaded network dataset"
        );
        Ok(network)
    }

    /// Load a dataset from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NetworkError> {
        let dto: DatasetDto = serde_json::from_reader(reader)?;
        convert(dto)
    }

    /// Load a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let dto: DatasetDto = serde_json::from_str(json)?;
        convert(dto)
    }
}

fn convert(dto: DatasetDto) -> Result<Network, NetworkError> {
    let stations: Vec<Station> = dto.stations.into_iter().filter_map(convert_station).collect();
    if stations.is_empty() {
        return Err(NetworkError::NoStations);
    }

    let lines = dto.lines.into_iter().filter_map(convert_line).collect();
    Ok(Network::new(stations, lines))
}

fn convert_station(dto: StationDto) -> Option<Station> {
    let Ok(id) = StationId::parse(&dto.id) else {
        warn!(name = %dto.name, "Skipping station with blank id");
        return None;
    };

    let Some(coordinates) = convert_coordinates(&dto.coordinates) else {
        warn!(station = %id, coordinates = %dto.coordinates, "Skipping station with unusable coordinates");
        return None;
    };

    // The name is the interchange key; fall back to the id so the record
    // at least stays reachable along its lines.
    let name = if dto.name.trim().is_empty() {
        warn!(station = %id, "Station has no name, using its id");
        id.as_str().to_string()
    } else {
        dto.name
    };

    let lines = dto.lines.iter().filter_map(|l| LineId::parse(l).ok()).collect();

    Some(Station::new(id, name, coordinates, lines))
}

fn convert_coordinates(value: &Value) -> Option<Coordinates> {
    let obj = value.as_object()?;
    let lat = obj.get("lat").or_else(|| obj.get("latitude")).and_then(coerce_number)?;
    let lng = obj.get("lng").or_else(|| obj.get("longitude")).and_then(coerce_number)?;
    Coordinates::new(lat, lng).ok()
}

fn convert_line(dto: LineDto) -> Option<MetroLine> {
    let Ok(id) = LineId::parse(&dto.id) else {
        warn!(name = %dto.name, "Skipping line with blank id");
        return None;
    };

    let total = dto.stations.len();
    let stations: Vec<StationId> = dto
        .stations
        .iter()
        .filter_map(|s| StationId::parse(s).ok())
        .collect();
    if stations.len() != total {
        warn!(line = %id, dropped = total - stations.len(), "Dropped blank station ids from line");
    }

    Some(MetroLine::new(id, dto.name, dto.color, stations))
}
