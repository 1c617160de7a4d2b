//! Demo entry point
//!
//! Stands in for the presentation layer: mounts the dashboard over the
//! bundled sample dataset, attaches a logging subscriber, and drives a
//! scripted interaction sequence through the pipeline.

use std::sync::Arc;

use anyhow::Result;
use gv_core::{DashboardEvent, Measure, Selection, RANGE_LOWER_KEY, RANGE_UPPER_KEY};
use gv_views::{Dashboard, ViewSubscriber, ViewUpdate};
use serde_json::json;
use tracing::info;

mod demo;

/// Logs each republished series the way a renderer would consume it.
struct LoggingRenderer;

impl ViewSubscriber for LoggingRenderer {
    fn on_view_update(&self, update: &ViewUpdate) {
        let points = match update {
            ViewUpdate::Trend(points) => points.len(),
            ViewUpdate::Bubble(points) => points.len(),
            ViewUpdate::TopPopulation(bars) => bars.len(),
            ViewUpdate::Composition(slices) => slices.len(),
        };
        info!(view = ?update.kind(), points, "view updated");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let dataset = demo::sample_dataset();

    // Default selection matches the dashboard's initial dropdowns;
    // measure strings come from the presentation layer and fail fast
    // if misconfigured.
    let mut selection = Selection::default();
    selection.countries = ["Russia", "United Kingdom", "Canada"]
        .into_iter()
        .map(str::to_string)
        .collect();
    selection.measure = "pop".parse::<Measure>()?;

    let dashboard = Dashboard::new(dataset, selection);
    let renderer: Arc<dyn ViewSubscriber> = Arc::new(LoggingRenderer);
    dashboard.add_subscriber(Arc::clone(&renderer));

    info!("initial render");
    dashboard.refresh_all();

    info!("switching trend measure to lifeExp");
    dashboard.handle_event(DashboardEvent::MeasureSelected("lifeExp".parse()?));

    info!("re-pointing the bubble size at lifeExp");
    dashboard.handle_event(DashboardEvent::BubbleAxesSelected {
        x: "gdpPercap".parse()?,
        y: "pop".parse()?,
        size: "lifeExp".parse()?,
    });

    info!("zooming the trend chart to 1996..2003");
    dashboard.handle_event(DashboardEvent::TrendRelayout(json!({
        RANGE_LOWER_KEY: 1996.2,
        RANGE_UPPER_KEY: 2003.7,
    })));

    info!("double-click reset");
    dashboard.handle_event(DashboardEvent::TrendRelayout(json!({
        "xaxis.autorange": true,
    })));

    info!(range = ?dashboard.year_range(), "session finished");
    Ok(())
}
