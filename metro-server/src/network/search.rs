//! Station lookup by name, for station pickers.

use crate::domain::Station;

use super::dataset::Network;

impl Network {
    /// Stations ordered by display name, then id.
    pub fn stations_sorted_by_name(&self) -> Vec<&Station> {
        let mut sorted: Vec<&Station> = self.stations().iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        sorted
    }

    /// Search stations by name or id.
    ///
    /// Matching is a case-insensitive substring test. Results are ordered
    /// by name and truncated to `limit`. A blank query matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();

        self.stations_sorted_by_name()
            .into_iter()
            .filter(|s| {
                needle.is_empty()
                    || s.name.to_lowercase().contains(&needle)
                    || s.id.as_str().to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }
}
