//! Data layer for the dashboard pipeline
//!
//! Holds the immutable tabular dataset and derives the range-filtered
//! "latest record per country" snapshot the bubble, bar, and pie views
//! consume.

pub mod cache;
pub mod dataset;
pub mod record;
pub mod snapshot;

pub use cache::SnapshotCache;
pub use dataset::Dataset;
pub use record::Record;
pub use snapshot::{latest_per_country, LatestSnapshot};
