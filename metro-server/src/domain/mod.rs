//! Domain types for the metro journey planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod line;
mod position;
mod station;

pub use error::DomainError;
pub use line::{LineId, MetroLine};
pub use position::Position;
pub(crate) use position::coerce_number;
pub use station::{Coordinates, Station, StationId};
