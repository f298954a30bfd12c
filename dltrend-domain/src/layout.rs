//! Axis ranges, month ticks and annotation offsets.

use crate::DomainError;
use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use dltrend_types::CumulativePoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Space added around the data when fixing the axis ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisPadding {
    /// Added on top of the final cumulative total.
    pub headroom: u64,
    /// Days shown before the first record.
    pub lead_in_days: i64,
    /// Days shown after the last record.
    pub trail_days: i64,
}

impl Default for AxisPadding {
    fn default() -> Self {
        Self {
            headroom: 1000,
            lead_in_days: 5,
            trail_days: 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub x_start: NaiveDate,
    pub x_end: NaiveDate,
    pub y_min: u64,
    pub y_max: u64,
}

/// x spans `[first - lead_in, last + trail]`, y spans `[0, final total + headroom]`.
pub fn axis_bounds(
    points: &[CumulativePoint],
    padding: &AxisPadding,
) -> Result<AxisBounds, DomainError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(DomainError::EmptySeries);
    };

    Ok(AxisBounds {
        x_start: shift_days(first.date, padding.lead_in_days.saturating_neg())?,
        x_end: shift_days(last.date, padding.trail_days)?,
        y_min: 0,
        y_max: last.cumulative_total.saturating_add(padding.headroom),
    })
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DomainError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(DomainError::DateOutOfRange { date, days })
}

/// First day of every month inside `[start, end]`.
pub fn month_ticks(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    const ONE_MONTH: Months = Months::new(1);

    let first = start.with_day(1).and_then(|d| {
        if d < start {
            d.checked_add_months(ONE_MONTH)
        } else {
            Some(d)
        }
    });

    std::iter::successors(first, |d| d.checked_add_months(ONE_MONTH))
        .take_while(|d| *d <= end)
        .collect()
}

/// Offset of an annotation from its anchor point, in typographic points.
///
/// Positive `dy` moves the text up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub dx: f64,
    pub dy: f64,
}

impl LabelOffset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Where version annotations sit relative to their marker.
///
/// Labels listed in `overrides` get their own offset; the built-in table lifts
/// "1.2.0" clear of the neighbouring "1.1.0" label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPlacement {
    pub default_offset: LabelOffset,
    pub overrides: BTreeMap<String, LabelOffset>,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            default_offset: LabelOffset::new(-5.0, 0.0),
            overrides: BTreeMap::from([("1.2.0".to_string(), LabelOffset::new(-5.0, 15.0))]),
        }
    }
}

impl LabelPlacement {
    pub fn offset_for(&self, label: &str) -> LabelOffset {
        self.overrides
            .get(label)
            .copied()
            .unwrap_or(self.default_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_day;
    use pretty_assertions::assert_eq;

    fn point(date: &str, cumulative_total: u64) -> CumulativePoint {
        CumulativePoint {
            date: parse_day(date).expect("date"),
            cumulative_total,
        }
    }

    #[test]
    fn bounds_use_first_and_last_points() {
        let points = vec![point("2025-03-04", 0), point("2025-03-05", 15), point("2025-03-07", 21)];
        let bounds = axis_bounds(&points, &AxisPadding::default()).expect("bounds");
        assert_eq!(bounds.x_start, parse_day("2025-02-27").unwrap());
        assert_eq!(bounds.x_end, parse_day("2025-04-08").unwrap());
        assert_eq!(bounds.y_min, 0);
        assert_eq!(bounds.y_max, 1021);
    }

    #[test]
    fn bounds_of_empty_series_fail() {
        let err = axis_bounds(&[], &AxisPadding::default()).expect_err("empty");
        assert!(matches!(err, DomainError::EmptySeries));
    }

    #[test]
    fn bounds_report_date_overflow() {
        let points = vec![point("2025-03-04", 0)];
        let padding = AxisPadding {
            trail_days: i64::MAX,
            ..AxisPadding::default()
        };
        let err = axis_bounds(&points, &padding).expect_err("overflow");
        assert!(matches!(err, DomainError::DateOutOfRange { .. }));
    }

    #[test]
    fn month_ticks_skip_partial_first_month() {
        let ticks = month_ticks(parse_day("2025-02-27").unwrap(), parse_day("2025-05-01").unwrap());
        let labels: Vec<String> = ticks.iter().map(|d| d.to_string()).collect();
        assert_eq!(labels, vec!["2025-03-01", "2025-04-01", "2025-05-01"]);
    }

    #[test]
    fn month_ticks_include_start_on_first_of_month() {
        let ticks = month_ticks(parse_day("2025-03-01").unwrap(), parse_day("2025-03-31").unwrap());
        assert_eq!(ticks, vec![parse_day("2025-03-01").unwrap()]);
    }

    #[test]
    fn month_ticks_cross_year_boundary() {
        let ticks = month_ticks(parse_day("2025-11-15").unwrap(), parse_day("2026-02-10").unwrap());
        let labels: Vec<String> = ticks.iter().map(|d| d.format("%Y-%m").to_string()).collect();
        assert_eq!(labels, vec!["2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn label_placement_special_cases_1_2_0() {
        let placement = LabelPlacement::default();
        assert_eq!(placement.offset_for("1.2.0"), LabelOffset::new(-5.0, 15.0));
        assert_eq!(placement.offset_for("1.3.0"), LabelOffset::new(-5.0, 0.0));
    }

    #[test]
    fn label_placement_deserializes_partial_tables() {
        let placement: LabelPlacement = serde_json::from_value(serde_json::json!({
            "overrides": { "1.4.0": { "dx": 0.0, "dy": 8.0 } }
        }))
        .expect("deserialize");
        assert_eq!(placement.default_offset, LabelOffset::new(-5.0, 0.0));
        assert_eq!(placement.offset_for("1.4.0"), LabelOffset::new(0.0, 8.0));
        assert_eq!(placement.offset_for("1.2.0"), LabelOffset::new(-5.0, 0.0));
    }
}
