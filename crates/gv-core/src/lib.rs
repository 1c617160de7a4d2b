//! Core types and interaction handling for the dashboard pipeline
//!
//! This crate defines the selection state shared by every view, the
//! year-range extraction from raw chart interaction payloads, and the
//! change tracking the coordinator uses to recompute selectively.

pub mod error;
pub mod interaction;
pub mod measure;
pub mod range;
pub mod selection;

// Re-export commonly used types
pub use error::ConfigError;
pub use interaction::{extract_year_range, DashboardEvent, RANGE_LOWER_KEY, RANGE_UPPER_KEY};
pub use measure::Measure;
pub use range::YearRange;
pub use selection::{BubbleAxes, Input, InputChanges, Selection};
