//! Latest-per-country snapshot reduction

use gv_core::YearRange;
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::dataset::Dataset;
use crate::record::Record;

/// The deduplicated, range-filtered "current state of the world."
///
/// At most one record per country: the one with the maximum year inside
/// the active range, or globally when no range applies. A pure function
/// of `(dataset, range)` with no identity of its own; downstream views
/// re-sort as they need and never rely on this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestSnapshot {
    records: Vec<Record>,
}

impl LatestSnapshot {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reduce the dataset to the latest record per country within `range`.
///
/// Single pass: rows outside the range are skipped, the rest are
/// grouped by country keeping the max-year row. The comparison is
/// strictly-greater, so when several rows share a country's max year
/// the first one in dataset order wins, deterministic and stable
/// across repeated calls. An empty post-filter dataset yields an empty
/// snapshot, not an error.
pub fn latest_per_country(dataset: &Dataset, range: Option<YearRange>) -> LatestSnapshot {
    let mut latest: IndexMap<&str, &Record> = IndexMap::with_capacity(dataset.len().min(256));
    for record in dataset.records() {
        if let Some(range) = range {
            if !range.contains(record.year) {
                continue;
            }
        }
        match latest.entry(record.country.as_str()) {
            Entry::Occupied(mut entry) => {
                if record.year > entry.get().year {
                    entry.insert(record);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }
    LatestSnapshot {
        records: latest.into_values().cloned().collect(),
    }
}
