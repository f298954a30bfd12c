use crate::{
    AxisBounds, AxisPadding, DomainError, axis_bounds, cumulative_series, major_markers,
    month_ticks,
};
use chrono::NaiveDate;
use dltrend_types::{CumulativePoint, MajorMarker, ReleaseRecord, SeriesRow, SeriesSummary};
use tracing::debug;

/// Everything the renderer needs, derived once from the records.
#[derive(Debug, Clone)]
pub struct Trend {
    pub records: Vec<ReleaseRecord>,
    pub points: Vec<CumulativePoint>,
    pub majors: Vec<MajorMarker>,
    pub bounds: AxisBounds,
    pub month_ticks: Vec<NaiveDate>,
}

impl Trend {
    pub fn build(records: Vec<ReleaseRecord>, padding: &AxisPadding) -> Result<Self, DomainError> {
        let points = cumulative_series(&records);
        let majors = major_markers(&records, &points);
        let bounds = axis_bounds(&points, padding)?;
        let month_ticks = month_ticks(bounds.x_start, bounds.x_end);

        debug!(
            records = records.len(),
            majors = majors.len(),
            ticks = month_ticks.len(),
            y_max = bounds.y_max,
            "built trend"
        );

        Ok(Self {
            records,
            points,
            majors,
            bounds,
            month_ticks,
        })
    }

    /// Cumulative total of the last point (the all-time total when a sentinel is present).
    pub fn final_total(&self) -> u64 {
        self.points.last().map_or(0, |p| p.cumulative_total)
    }

    pub fn summary(&self, generated_on: NaiveDate) -> SeriesSummary {
        let rows = self
            .records
            .iter()
            .zip(&self.points)
            .map(|(record, point)| SeriesRow {
                date: record.date,
                label: record.label.clone(),
                delta: record.delta,
                cumulative_total: point.cumulative_total,
                major: record.is_major(),
            })
            .collect();
        SeriesSummary::new(generated_on, rows)
    }
}
