//! The record store: an immutable, ordered collection of campaigns.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::campaign::Campaign;
use crate::error::{Result, SeekerError};

/// Immutable campaign catalog.
///
/// The catalog is the context object every search, filter and summary works
/// from. It is built once and only handed out by shared reference; derived
/// views borrow from it and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Campaign>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids. Record order is kept.
    pub fn new(records: Vec<Campaign>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(SeekerError::DuplicateId(record.id()));
            }
        }
        Ok(Catalog { records })
    }

    pub fn records(&self) -> &[Campaign] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Campaign> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a campaign by id.
    pub fn get(&self, id: u32) -> Option<&Campaign> {
        self.records.iter().find(|c| c.id() == id)
    }

    /// Distinct agencies, sorted.
    pub fn agencies(&self) -> Vec<&str> {
        distinct_sorted(self.records.iter().map(Campaign::agency))
    }

    /// Distinct sectors, sorted.
    pub fn sectors(&self) -> Vec<&str> {
        distinct_sorted(self.records.iter().map(Campaign::sector))
    }

    /// Distinct media channels across all records, sorted.
    pub fn media_channels(&self) -> Vec<&str> {
        distinct_sorted(
            self.records
                .iter()
                .flat_map(|c| c.media().iter().map(String::as_str)),
        )
    }

    /// Earliest and latest launch dates, or `None` for an empty catalog.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(Campaign::launch_date).min()?;
        let max = self.records.iter().map(Campaign::launch_date).max()?;
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Campaign;
    type IntoIter = std::slice::Iter<'a, Campaign>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
