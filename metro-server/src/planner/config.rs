//! Duration estimate configuration.

use chrono::Duration;
use serde::Deserialize;
use tracing::warn;

const DEFAULT_AVERAGE_SPEED_KMH: f64 = 45.0;
const DEFAULT_DWELL_SECS: u32 = 20;
const DEFAULT_INTERCHANGE_SECS: u32 = 120;
const DEFAULT_LINE_CHANGE_SECS: u32 = 600;

/// Configuration parameters for journey duration estimates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Average train speed between stops (km/h).
    pub average_speed_kmh: f64,

    /// Time spent stopped at each stop (seconds).
    pub dwell_secs: u32,

    /// Walking time between platforms of one interchange (seconds).
    pub interchange_penalty_secs: u32,

    /// Penalty for each change of line (seconds).
    /// Covers waiting for the next train on top of the walk.
    pub line_change_penalty_secs: u32,
}

impl EstimateConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        average_speed_kmh: f64,
        dwell_secs: u32,
        interchange_penalty_secs: u32,
        line_change_penalty_secs: u32,
    ) -> Self {
        Self {
            average_speed_kmh,
            dwell_secs,
            interchange_penalty_secs,
            line_change_penalty_secs,
        }
    }

    /// Read overrides from `METRO_*` environment variables.
    ///
    /// Unset variables keep their default. Unparseable or non-positive
    /// values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = positive(&lookup, "METRO_AVERAGE_SPEED_KMH") {
            config.average_speed_kmh = v;
        }
        if let Some(v) = positive(&lookup, "METRO_DWELL_SECS") {
            config.dwell_secs = v as u32;
        }
        if let Some(v) = positive(&lookup, "METRO_INTERCHANGE_SECS") {
            config.interchange_penalty_secs = v as u32;
        }
        if let Some(v) = positive(&lookup, "METRO_LINE_CHANGE_SECS") {
            config.line_change_penalty_secs = v as u32;
        }

        config
    }

    /// Returns the average speed in metres per second.
    ///
    /// A non-positive or non-finite configured speed falls back to the
    /// default, so running time is always finite.
    pub fn average_speed_mps(&self) -> f64 {
        let kmh = if self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0 {
            self.average_speed_kmh
        } else {
            DEFAULT_AVERAGE_SPEED_KMH
        };
        kmh * 1000.0 / 3600.0
    }

    /// Returns the per-stop dwell time as a Duration.
    pub fn dwell_per_stop(&self) -> Duration {
        Duration::seconds(self.dwell_secs.into())
    }

    /// Returns the interchange walking penalty as a Duration.
    pub fn interchange_penalty(&self) -> Duration {
        Duration::seconds(self.interchange_penalty_secs.into())
    }

    /// Returns the line-change penalty as a Duration.
    pub fn line_change_penalty(&self) -> Duration {
        Duration::seconds(self.line_change_penalty_secs.into())
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            dwell_secs: DEFAULT_DWELL_SECS,
            interchange_penalty_secs: DEFAULT_INTERCHANGE_SECS,
            line_change_penalty_secs: DEFAULT_LINE_CHANGE_SECS, // 10 minutes
        }
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => {
            warn!(key, value = %raw, "Ignoring invalid estimate setting");
            None
        }
    }
}
