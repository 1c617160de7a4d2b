//! Dashboard coordinator
//!
//! Owns the shared [`Selection`], turns interaction events into the
//! minimal set of view recomputations, and republishes the resulting
//! typed series to subscribers (the presentation layer).

use std::sync::{Arc, Weak};

use gv_core::{DashboardEvent, Input, Selection, YearRange};
use gv_data::{Dataset, LatestSnapshot, SnapshotCache};
use parking_lot::RwLock;
use serde::Serialize;

use crate::bar::{project_top_population, BarEntry, DEFAULT_TOP_N};
use crate::bubble::{project_bubble, BubblePoint};
use crate::composition::{project_composition, ContinentSlice};
use crate::trend::{project_trend, TrendPoint};

/// The four dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewKind {
    Trend,
    Bubble,
    TopPopulation,
    Composition,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Trend,
        ViewKind::Bubble,
        ViewKind::TopPopulation,
        ViewKind::Composition,
    ];

    /// Declarative dependency table: the selection inputs this view is
    /// recomputed from. An interaction recomputes exactly the views
    /// whose inputs it changed.
    pub fn inputs(self) -> &'static [Input] {
        match self {
            ViewKind::Trend => &[Input::Countries, Input::Measure],
            ViewKind::Bubble => &[Input::BubbleAxes, Input::Range],
            ViewKind::TopPopulation => &[Input::Range],
            ViewKind::Composition => &[Input::Range],
        }
    }
}

/// A recomputed, render-ready series for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViewUpdate {
    Trend(Vec<TrendPoint>),
    Bubble(Vec<BubblePoint>),
    TopPopulation(Vec<BarEntry>),
    Composition(Vec<ContinentSlice>),
}

impl ViewUpdate {
    /// Which panel this series belongs to.
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewUpdate::Trend(_) => ViewKind::Trend,
            ViewUpdate::Bubble(_) => ViewKind::Bubble,
            ViewUpdate::TopPopulation(_) => ViewKind::TopPopulation,
            ViewUpdate::Composition(_) => ViewKind::Composition,
        }
    }
}

/// Trait for components that receive recomputed view series.
pub trait ViewSubscriber: Send + Sync {
    /// Called once per recomputed view, in a single interaction's turn.
    fn on_view_update(&self, update: &ViewUpdate);
}

/// The dashboard coordinator.
///
/// One interaction runs to completion (selection update, snapshot
/// reduction, affected projections, publication) before the next is
/// accepted, so subscribers always observe series derived from the
/// most recent interaction.
pub struct Dashboard {
    dataset: Dataset,
    selection: RwLock<Selection>,
    snapshots: SnapshotCache,
    subscribers: RwLock<Vec<Weak<dyn ViewSubscriber>>>,
    top_n: usize,
}

impl Dashboard {
    /// Mount a dashboard over an already-loaded dataset.
    pub fn new(dataset: Dataset, selection: Selection) -> Self {
        tracing::info!(
            rows = dataset.len(),
            countries = dataset.countries().len(),
            "dashboard mounted"
        );
        Self {
            dataset,
            selection: RwLock::new(selection),
            snapshots: SnapshotCache::default(),
            subscribers: RwLock::new(Vec::new()),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Override the bar chart's top-N (default 15).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Snapshot of the current selection state.
    pub fn selection(&self) -> Selection {
        self.selection.read().clone()
    }

    /// The active year window, `None` while unzoomed.
    pub fn year_range(&self) -> Option<YearRange> {
        self.selection.read().range
    }

    /// Register a subscriber. Held weakly; dropped subscribers are
    /// pruned on the next publication.
    pub fn add_subscriber(&self, subscriber: Arc<dyn ViewSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Recompute and publish every view from the current selection.
    /// Used once at dashboard mount, before any interaction arrives.
    pub fn refresh_all(&self) -> Vec<ViewUpdate> {
        self.project_views(&ViewKind::ALL)
    }

    /// Apply one interaction event and recompute only the views whose
    /// declared inputs changed. Returns the recomputed series, which
    /// are also published to subscribers. A no-op event (the selection
    /// did not change) recomputes nothing.
    pub fn handle_event(&self, event: DashboardEvent) -> Vec<ViewUpdate> {
        let changes = self.selection.write().apply(&event);
        if !changes.any() {
            return Vec::new();
        }

        let affected: Vec<ViewKind> = ViewKind::ALL
            .into_iter()
            .filter(|view| view.inputs().iter().any(|input| changes.contains(*input)))
            .collect();
        tracing::debug!(?changes, views = affected.len(), "recomputing affected views");
        self.project_views(&affected)
    }

    fn project_views(&self, views: &[ViewKind]) -> Vec<ViewUpdate> {
        let selection = self.selection.read().clone();
        let mut updates = Vec::with_capacity(views.len());
        for view in views {
            let update = match view {
                ViewKind::Trend => ViewUpdate::Trend(project_trend(
                    &self.dataset,
                    &selection.countries,
                    selection.measure,
                )),
                ViewKind::Bubble => ViewUpdate::Bubble(project_bubble(
                    &self.snapshot(selection.range),
                    selection.bubble_axes,
                )),
                ViewKind::TopPopulation => ViewUpdate::TopPopulation(project_top_population(
                    &self.snapshot(selection.range),
                    self.top_n,
                )),
                ViewKind::Composition => ViewUpdate::Composition(project_composition(
                    &self.snapshot(selection.range),
                )),
            };
            self.publish(&update);
            updates.push(update);
        }
        updates
    }

    /// Range-keyed snapshot lookup; repeated calls within one
    /// interaction hit the cache, so each range is reduced once.
    fn snapshot(&self, range: Option<YearRange>) -> Arc<LatestSnapshot> {
        self.snapshots.get_or_reduce(&self.dataset, range)
    }

    fn publish(&self, update: &ViewUpdate) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|weak| weak.strong_count() > 0);
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_view_update(update);
            }
        }
    }
}
