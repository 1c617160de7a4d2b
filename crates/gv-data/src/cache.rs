//! Snapshot memoization

use std::sync::Arc;

use ahash::AHashMap;
use gv_core::YearRange;
use parking_lot::RwLock;

use crate::dataset::Dataset;
use crate::snapshot::{latest_per_country, LatestSnapshot};

/// Memoizes snapshot reductions by year range.
///
/// A snapshot is a pure function of `(dataset, range)` and the dataset
/// is immutable for its whole lifetime, so entries never invalidate.
/// The cap only bounds memory during long zoom sessions.
pub struct SnapshotCache {
    entries: RwLock<AHashMap<Option<YearRange>, Arc<LatestSnapshot>>>,
    max_entries: usize,
}

impl SnapshotCache {
    /// Create a cache holding at most `max_entries` snapshots.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
            max_entries,
        }
    }

    /// Fetch the snapshot for `range`, reducing on a miss.
    pub fn get_or_reduce(&self, dataset: &Dataset, range: Option<YearRange>) -> Arc<LatestSnapshot> {
        if let Some(hit) = self.entries.read().get(&range) {
            return Arc::clone(hit);
        }

        let snapshot = Arc::new(latest_per_country(dataset, range));
        tracing::debug!(?range, countries = snapshot.len(), "snapshot reduced");

        let mut entries = self.entries.write();
        if entries.len() >= self.max_entries && !entries.contains_key(&range) {
            // Evict an arbitrary entry; recomputing a snapshot is cheap.
            if let Some(key) = entries.keys().next().copied() {
                entries.remove(&key);
            }
        }
        entries.insert(range, Arc::clone(&snapshot));
        snapshot
    }

    /// Drop every cached snapshot.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(32)
    }
}
