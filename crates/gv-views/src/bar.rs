//! Top-N population bar projection

use gv_data::LatestSnapshot;
use serde::Serialize;

/// Number of countries the population bar chart shows by default.
pub const DEFAULT_TOP_N: usize = 15;

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEntry {
    pub country: String,
    pub population: f64,
    pub year: i32,
}

/// The `n` most populous countries in the snapshot, ascending.
///
/// Bars render top-to-bottom in array order, so ascending puts the
/// largest bar at the bottom (leaderboard pointing up). Fewer than `n`
/// countries means all of them, in the same order.
pub fn project_top_population(snapshot: &LatestSnapshot, n: usize) -> Vec<BarEntry> {
    let mut entries: Vec<BarEntry> = snapshot
        .records()
        .iter()
        .map(|record| BarEntry {
            country: record.country.clone(),
            population: record.population,
            year: record.year,
        })
        .collect();
    // Stable sort keeps snapshot order for equal populations.
    entries.sort_by(|a, b| b.population.total_cmp(&a.population));
    entries.truncate(n);
    entries.reverse();
    entries
}
