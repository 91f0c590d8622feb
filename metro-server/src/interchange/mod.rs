//! Interchanges between station records.
//!
//! An interchange is a physical complex served by several lines. The
//! dataset records each platform separately, under its own id, and the only
//! sign that two records are the same place is an identical display name.
//! This module groups records by exact, case-sensitive name.

use std::collections::HashMap;

use crate::domain::{Station, StationId};

/// Station records grouped into interchange complexes.
///
/// Only names shared by two or more records form a group. Groups and their
/// members keep station declaration order.
#[derive(Debug, Clone, Default)]
pub struct InterchangeGroups {
    groups: Vec<Vec<StationId>>,
    group_of: HashMap<StationId, usize>,
}

impl InterchangeGroups {
    /// Group station records by display name.
    pub fn from_stations<'a>(stations: impl IntoIterator<Item = &'a Station>) -> Self {
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        let mut all: Vec<Vec<StationId>> = Vec::new();

        for station in stations {
            let slot = *by_name.entry(station.name.as_str()).or_insert_with(|| {
                all.push(Vec::new());
                all.len() - 1
            });
            if !all[slot].contains(&station.id) {
                all[slot].push(station.id.clone());
            }
        }

        let groups: Vec<Vec<StationId>> = all.into_iter().filter(|g| g.len() >= 2).collect();
        let group_of = groups
            .iter()
            .enumerate()
            .flat_map(|(i, g)| g.iter().map(move |id| (id.clone(), i)))
            .collect();

        Self { groups, group_of }
    }

    /// All interchange groups, each with two or more members.
    pub fn groups(&self) -> impl Iterator<Item = &[StationId]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Every unordered pair of records within each group.
    ///
    /// A group of three yields three pairs: the group is a clique, not a
    /// chain.
    pub fn pairs(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.groups.iter().flat_map(|g| {
            g.iter()
                .enumerate()
                .flat_map(move |(i, a)| g[i + 1..].iter().map(move |b| (a, b)))
        })
    }

    /// Check if two distinct records belong to the same complex.
    pub fn is_interchange(&self, a: &StationId, b: &StationId) -> bool {
        a != b
            && matches!(
                (self.group_of.get(a), self.group_of.get(b)),
                (Some(x), Some(y)) if x == y
            )
    }

    /// Get the other records in the same complex as `id`.
    pub fn interchanges_from(&self, id: &StationId) -> Vec<&StationId> {
        self.group_of
            .get(id)
            .map(|&i| self.groups[i].iter().filter(|other| *other != id).collect())
            .unwrap_or_default()
    }

    /// Returns the number of interchange complexes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no name is shared by two records.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
