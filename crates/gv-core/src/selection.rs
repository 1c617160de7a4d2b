//! Selection state shared across views

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::interaction::{extract_year_range, DashboardEvent};
use crate::measure::Measure;
use crate::range::YearRange;

/// The bubble chart's axis assignment, one measure per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleAxes {
    pub x: Measure,
    pub y: Measure,
    pub size: Measure,
}

impl Default for BubbleAxes {
    fn default() -> Self {
        Self {
            x: Measure::LifeExp,
            y: Measure::Population,
            size: Measure::GdpPercap,
        }
    }
}

/// Selection state owned by the coordinator.
///
/// Created at dashboard mount, mutated on every interaction, dropped at
/// teardown. Projectors receive it read-only and never hold onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Countries plotted by the trend view.
    pub countries: AHashSet<String>,

    /// Measure plotted by the trend view.
    pub measure: Measure,

    /// Axis assignment for the bubble view.
    pub bubble_axes: BubbleAxes,

    /// Active year window, `None` when no zoom filter applies.
    pub range: Option<YearRange>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            countries: AHashSet::new(),
            measure: Measure::Population,
            bubble_axes: BubbleAxes::default(),
            range: None,
        }
    }
}

/// A recomputation input tracked by the coordinator's dependency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Countries,
    Measure,
    BubbleAxes,
    Range,
}

/// Which selection inputs one interaction actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputChanges {
    pub countries: bool,
    pub measure: bool,
    pub bubble_axes: bool,
    pub range: bool,
}

impl InputChanges {
    /// Whether the given input changed.
    pub fn contains(&self, input: Input) -> bool {
        match input {
            Input::Countries => self.countries,
            Input::Measure => self.measure,
            Input::BubbleAxes => self.bubble_axes,
            Input::Range => self.range,
        }
    }

    /// Whether anything changed at all.
    pub fn any(&self) -> bool {
        self.countries || self.measure || self.bubble_axes || self.range
    }
}

impl Selection {
    /// Apply one interaction event, reporting which inputs changed.
    ///
    /// Events that leave the selection as-is (re-picking the current
    /// dropdown value, a relayout that normalizes to the current range)
    /// report no changes, so the coordinator recomputes nothing.
    pub fn apply(&mut self, event: &DashboardEvent) -> InputChanges {
        let mut changes = InputChanges::default();
        match event {
            DashboardEvent::CountriesSelected(countries) => {
                let next: AHashSet<String> = countries.iter().cloned().collect();
                if next != self.countries {
                    self.countries = next;
                    changes.countries = true;
                }
            }
            DashboardEvent::MeasureSelected(measure) => {
                if *measure != self.measure {
                    self.measure = *measure;
                    changes.measure = true;
                }
            }
            DashboardEvent::BubbleAxesSelected { x, y, size } => {
                let next = BubbleAxes {
                    x: *x,
                    y: *y,
                    size: *size,
                };
                if next != self.bubble_axes {
                    self.bubble_axes = next;
                    changes.bubble_axes = true;
                }
            }
            DashboardEvent::TrendRelayout(payload) => {
                let next = extract_year_range(Some(payload));
                if next != self.range {
                    tracing::debug!(from = ?self.range, to = ?next, "year range changed");
                    self.range = next;
                    changes.range = true;
                }
            }
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{RANGE_LOWER_KEY, RANGE_UPPER_KEY};
    use serde_json::json;

    #[test]
    fn test_zoom_then_reset_round_trips_range() {
        let mut selection = Selection::default();
        assert_eq!(selection.range, None);

        let zoom = DashboardEvent::TrendRelayout(json!({
            RANGE_LOWER_KEY: 1980.3,
            RANGE_UPPER_KEY: 1999.8,
        }));
        let changes = selection.apply(&zoom);
        assert!(changes.range && changes.any());
        assert_eq!(selection.range, Some(YearRange::new(1980, 1999)));

        // Double-click reset reports autorange, not bounds.
        let reset = DashboardEvent::TrendRelayout(json!({ "xaxis.autorange": true }));
        let changes = selection.apply(&reset);
        assert!(changes.range);
        assert_eq!(selection.range, None);
    }

    #[test]
    fn test_identical_relayout_reports_no_change() {
        let mut selection = Selection::default();
        let zoom = DashboardEvent::TrendRelayout(json!({
            RANGE_LOWER_KEY: 1980,
            RANGE_UPPER_KEY: 1999,
        }));
        assert!(selection.apply(&zoom).range);
        assert_eq!(selection.apply(&zoom), InputChanges::default());
    }

    #[test]
    fn test_reselecting_same_measure_is_a_no_op() {
        let mut selection = Selection::default();
        let event = DashboardEvent::MeasureSelected(Measure::Population);
        assert!(!selection.apply(&event).any());

        let event = DashboardEvent::MeasureSelected(Measure::LifeExp);
        let changes = selection.apply(&event);
        assert!(changes.measure);
        assert!(!changes.countries && !changes.bubble_axes && !changes.range);
    }

    #[test]
    fn test_country_order_does_not_matter() {
        let mut selection = Selection::default();
        let forward = DashboardEvent::CountriesSelected(vec![
            "Canada".to_string(),
            "Russia".to_string(),
        ]);
        assert!(selection.apply(&forward).countries);

        let reversed = DashboardEvent::CountriesSelected(vec![
            "Russia".to_string(),
            "Canada".to_string(),
        ]);
        assert!(!selection.apply(&reversed).any());
    }

    #[test]
    fn test_changes_contains_matches_flags() {
        let changes = InputChanges {
            measure: true,
            ..Default::default()
        };
        assert!(changes.contains(Input::Measure));
        assert!(!changes.contains(Input::Countries));
        assert!(!changes.contains(Input::BubbleAxes));
        assert!(!changes.contains(Input::Range));
    }
}
