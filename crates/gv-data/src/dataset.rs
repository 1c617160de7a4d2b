//! Immutable in-memory dataset store

use std::sync::Arc;

use indexmap::IndexSet;

use crate::record::Record;

/// The loaded tabular dataset.
///
/// Sourced once at startup by an external loader and never mutated
/// afterwards, so it is shared by reference across every projector
/// invocation without synchronization. Clones are cheap (`Arc`).
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<Vec<Record>>,
}

impl Dataset {
    /// Wrap an already-parsed sequence of records.
    pub fn new(records: Vec<Record>) -> Self {
        tracing::info!(rows = records.len(), "dataset loaded");
        Self {
            records: Arc::new(records),
        }
    }

    /// All records, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries in first-encounter order, for dropdown options.
    pub fn countries(&self) -> Vec<String> {
        let unique: IndexSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();
        unique.into_iter().map(str::to_string).collect()
    }

    /// Smallest and largest year present, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), year| {
            (lo.min(year), hi.max(year))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32) -> Record {
        Record {
            country: country.to_string(),
            continent: "X".to_string(),
            year,
            population: 1.0,
            life_exp: 1.0,
            gdp_percap: 1.0,
        }
    }

    #[test]
    fn test_countries_are_unique_in_first_encounter_order() {
        let dataset = Dataset::new(vec![
            record("B", 2000),
            record("A", 2000),
            record("B", 2005),
        ]);
        assert_eq!(dataset.countries(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_year_bounds() {
        let dataset = Dataset::new(vec![
            record("A", 1987),
            record("A", 1952),
            record("A", 2007),
        ]);
        assert_eq!(dataset.year_bounds(), Some((1952, 2007)));
        assert_eq!(Dataset::new(Vec::new()).year_bounds(), None);
    }
}
