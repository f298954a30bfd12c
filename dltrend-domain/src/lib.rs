//! Domain logic: turn the release history into the series the chart draws.
//!
//! This crate owns *what* is plotted (cumulative totals, major markers, axis
//! bounds, tick dates, label offsets). It does not own *how* pixels are
//! produced; that's the `dltrend-render` crate.

mod aggregate;
mod dataset;
mod error;
mod layout;
mod majors;
mod trend;

pub use aggregate::{cumulative_series, cumulative_totals};
pub use dataset::{DATE_FORMAT, build_dataset, historical_releases, parse_day, with_sentinel};
pub use error::DomainError;
pub use layout::{AxisBounds, AxisPadding, LabelOffset, LabelPlacement, axis_bounds, month_ticks};
pub use majors::major_markers;
pub use trend::Trend;
