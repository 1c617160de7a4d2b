//! Trend view projection: per-country time series

use ahash::AHashSet;
use gv_core::Measure;
use gv_data::Dataset;
use serde::Serialize;

/// One plotted point on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub value: f64,
    pub country: String,
}

/// Project the full dataset onto the trend chart for the chosen countries.
///
/// Filtering and field selection only; splitting the points into one
/// colored line per country is the presentation layer's job. The trend
/// view is the zoom source, so it always plots the unfiltered time axis.
pub fn project_trend(
    dataset: &Dataset,
    countries: &AHashSet<String>,
    measure: Measure,
) -> Vec<TrendPoint> {
    dataset
        .records()
        .iter()
        .filter(|record| countries.contains(record.country.as_str()))
        .map(|record| TrendPoint {
            year: record.year,
            value: record.measure(measure),
            country: record.country.clone(),
        })
        .collect()
}
