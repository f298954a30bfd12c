use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Downloads accumulated strictly before the release shipped on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cumulative_total: u64,
}

/// A point that gets a dot and a version annotation on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorMarker {
    pub date: NaiveDate,
    pub cumulative_total: u64,
    pub label: String,
}

/// One line of the tabular view of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub label: String,
    pub delta: u64,
    pub cumulative_total: u64,
    #[serde(default)]
    pub major: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTotals {
    /// Cumulative total of the last row.
    pub total_downloads: u64,
    /// Rows excluding the trailing "unreleased" record.
    pub releases: u64,
    pub majors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub schema: String,
    pub generated_on: NaiveDate,

    #[serde(default)]
    pub rows: Vec<SeriesRow>,

    pub totals: SeriesTotals,
}

impl SeriesSummary {
    pub fn new(generated_on: NaiveDate, rows: Vec<SeriesRow>) -> Self {
        let totals = SeriesTotals {
            total_downloads: rows.last().map_or(0, |r| r.cumulative_total),
            releases: rows
                .iter()
                .filter(|r| r.label != crate::UNRELEASED_LABEL)
                .count() as u64,
            majors: rows.iter().filter(|r| r.major).count() as u64,
        };
        Self {
            schema: crate::schema::DLTREND_SERIES_V1.to_string(),
            generated_on,
            rows,
            totals,
        }
    }
}
