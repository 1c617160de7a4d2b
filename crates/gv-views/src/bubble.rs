//! Bubble view projection: latest snapshot as a sized scatter

use gv_core::{BubbleAxes, Measure};
use gv_data::LatestSnapshot;
use serde::Serialize;

/// One marker on the bubble chart.
///
/// `size` is a data-space value; scaling it to marker pixels (and the
/// max marker diameter) belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub country: String,
    pub continent: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub year: i32,
}

/// Project the snapshot onto the bubble chart.
///
/// X and Y read the matching record field directly. Size does too for
/// population and gdpPercap, but life expectancy clusters in a narrow
/// band (roughly 40-85) and compresses poorly into marker area, so it
/// is normalized by the snapshot maximum and raised to the 6th power:
/// the maximum country gets exactly 1 and everything below it shrinks
/// toward zero, visually separating the outlier. An empty snapshot, or
/// a non-positive maximum in the lifeExp case, yields an empty series
/// rather than a division by zero.
pub fn project_bubble(snapshot: &LatestSnapshot, axes: BubbleAxes) -> Vec<BubblePoint> {
    let sizes: Vec<f64> = match axes.size {
        Measure::LifeExp => {
            let max = snapshot
                .records()
                .iter()
                .map(|record| record.life_exp)
                .fold(f64::NEG_INFINITY, f64::max);
            if !(max > 0.0) {
                return Vec::new();
            }
            snapshot
                .records()
                .iter()
                .map(|record| (record.life_exp / max).powi(6))
                .collect()
        }
        raw => snapshot
            .records()
            .iter()
            .map(|record| record.measure(raw))
            .collect(),
    };

    snapshot
        .records()
        .iter()
        .zip(sizes)
        .map(|(record, size)| BubblePoint {
            country: record.country.clone(),
            continent: record.continent.clone(),
            x: record.measure(axes.x),
            y: record.measure(axes.y),
            size,
            year: record.year,
        })
        .collect()
}
