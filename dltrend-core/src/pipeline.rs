//! Core render pipeline, extracted from the CLI.
//!
//! These entry points are I/O-agnostic: the date comes from a [`Clock`] and
//! all filesystem writes go through a [`WritePort`].

use crate::ports::{Clock, WritePort};
use crate::settings::RenderSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::NaiveDate;
use dltrend_domain::{AxisPadding, Trend, build_dataset};
use dltrend_render::ChartRenderer;
use dltrend_types::SeriesSummary;
use tracing::{debug, info};

/// Outcome of `run_render`.
#[derive(Debug)]
pub struct RenderOutcome {
    pub today: NaiveDate,
    pub trend: Trend,
    pub png: Vec<u8>,
}

/// Historical releases plus today's sentinel, aggregated and laid out.
pub fn build_trend(clock: &dyn Clock, padding: &AxisPadding) -> anyhow::Result<(NaiveDate, Trend)> {
    let today = clock.today();
    let records = build_dataset(today).context("build release dataset")?;
    let trend = Trend::build(records, padding).context("aggregate release series")?;
    debug!(%today, total = trend.final_total(), "trend ready");
    Ok((today, trend))
}

/// Run the render pipeline. Returns the series and the encoded PNG.
///
/// The caller is responsible for writing the image (via `WritePort`) or the
/// convenience `write_chart` helper.
pub fn run_render(settings: &RenderSettings, clock: &dyn Clock) -> anyhow::Result<RenderOutcome> {
    // Style problems surface before any data work.
    let renderer = ChartRenderer::new(settings.style.clone(), settings.labels.clone())
        .context("configure chart renderer")?;

    let (today, trend) = build_trend(clock, &settings.padding)?;
    let png = renderer.render_png(&trend).context("render chart")?;

    Ok(RenderOutcome { today, trend, png })
}

/// Write the chart, creating the parent directory first.
pub fn write_chart(
    outcome: &RenderOutcome,
    out_path: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    if let Some(parent) = out_path.parent()
        && !parent.as_str().is_empty()
    {
        writer.create_dir_all(parent)?;
    }
    writer.write_file(out_path, &outcome.png)?;
    info!(
        bytes = outcome.png.len(),
        total = outcome.trend.final_total(),
        "wrote chart to {}",
        out_path
    );
    Ok(())
}

/// The cumulative series as a table, without drawing anything.
pub fn run_summary(padding: &AxisPadding, clock: &dyn Clock) -> anyhow::Result<SeriesSummary> {
    let (today, trend) = build_trend(clock, padding)?;
    Ok(trend.summary(today))
}
