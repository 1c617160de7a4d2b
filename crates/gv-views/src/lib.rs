//! View projections and dashboard coordination
//!
//! Each projector is a pure function from the dataset (trend) or the
//! latest-per-country snapshot (bubble, bar, composition) to a typed,
//! render-ready series. The [`Dashboard`] owns the selection, fans
//! interaction events out, and republishes recomputed series to the
//! presentation layer.

mod bar;
mod bubble;
mod composition;
mod dashboard;
mod trend;

pub use bar::{project_top_population, BarEntry, DEFAULT_TOP_N};
pub use bubble::{project_bubble, BubblePoint};
pub use composition::{project_composition, ContinentSlice};
pub use dashboard::{Dashboard, ViewKind, ViewSubscriber, ViewUpdate};
pub use trend::{project_trend, TrendPoint};
