//! Shared DTOs for the dltrend workspace.
//!
//! # Design constraints
//! - Records are immutable values; derived series are recomputed, never patched.
//! - `SeriesSummary` is serialized to stdout as JSON, keep field names stable.

pub mod release;
pub mod series;

pub use release::{MAJOR_SUFFIX, ReleaseRecord, UNRELEASED_LABEL};
pub use series::{CumulativePoint, MajorMarker, SeriesRow, SeriesSummary, SeriesTotals};

/// Schema identifiers.
pub mod schema {
    pub const DLTREND_SERIES_V1: &str = "dltrend.series.v1";
}
