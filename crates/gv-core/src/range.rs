//! Year ranges derived from trend-chart zooms

use serde::{Deserialize, Serialize};

/// An inclusive year window applied to every non-trend view.
///
/// Always ordered: `from <= to`. "No filter" is represented as
/// `Option::<YearRange>::None`, never as a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// Create a range from two bounds in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    /// Whether `year` falls inside the window.
    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }
}
