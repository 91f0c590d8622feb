//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from dataset I/O errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Station identifier is blank
    #[error("invalid station id: {0:?}")]
    InvalidStationId(String),

    /// Line identifier is blank
    #[error("invalid line id: {0:?}")]
    InvalidLineId(String),

    /// Latitude/longitude not finite or out of range
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}
