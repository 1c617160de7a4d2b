//! Interaction events and range extraction
//!
//! The trend chart reports zooms and pans as a sparse relayout payload:
//! a JSON object that may or may not carry the two displayed x-axis
//! bounds. Extraction is total: anything short of two numeric bounds
//! degrades to "no range," never to an error.

use serde_json::Value;

use crate::measure::Measure;
use crate::range::YearRange;

/// Relayout key for the lower displayed x-axis bound.
pub const RANGE_LOWER_KEY: &str = "xaxis.range[0]";
/// Relayout key for the upper displayed x-axis bound.
pub const RANGE_UPPER_KEY: &str = "xaxis.range[1]";

/// One user interaction, as delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The trend chart's country multi-select changed.
    CountriesSelected(Vec<String>),
    /// The trend chart's measure dropdown changed.
    MeasureSelected(Measure),
    /// Any of the bubble chart's three axis selects changed.
    BubbleAxesSelected {
        x: Measure,
        y: Measure,
        size: Measure,
    },
    /// The trend chart was zoomed, panned, or reset. Carries the raw
    /// relayout payload; see [`extract_year_range`].
    TrendRelayout(Value),
}

/// Extract a normalized year range from a relayout payload.
///
/// Returns `Some` only when both bound keys are present and numeric;
/// fractional axis positions are truncated and reversed drags are
/// reordered. A payload with exactly one bound yields `None`: the
/// filter is all-or-nothing, matching the source dashboard, rather
/// than an open-ended interval that would silently drop one side of
/// every other chart.
pub fn extract_year_range(payload: Option<&Value>) -> Option<YearRange> {
    let map = payload?.as_object()?;
    let lower = map.get(RANGE_LOWER_KEY).and_then(Value::as_f64)?;
    let upper = map.get(RANGE_UPPER_KEY).and_then(Value::as_f64)?;
    Some(YearRange::new(lower.trunc() as i32, upper.trunc() as i32))
}
