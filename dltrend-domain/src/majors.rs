use dltrend_types::{CumulativePoint, MajorMarker, ReleaseRecord};

/// Pairs `records[i]` with `points[i]` and keeps the major releases, in order.
///
/// Extra entries on either side are ignored.
pub fn major_markers(records: &[ReleaseRecord], points: &[CumulativePoint]) -> Vec<MajorMarker> {
    records
        .iter()
        .zip(points)
        .filter(|(record, _)| record.is_major())
        .map(|(record, point)| MajorMarker {
            date: point.date,
            cumulative_total: point.cumulative_total,
            label: record.label.clone(),
        })
        .collect()
}
