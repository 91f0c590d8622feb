//! Metro network dataset.
//!
//! Provides the immutable station/line snapshot every planner component
//! reads from, loaded once from JSON at startup.

mod dataset;
mod error;
mod load;
mod search;

pub use dataset::Network;
pub use error::NetworkError;
