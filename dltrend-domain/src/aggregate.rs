use dltrend_types::{CumulativePoint, ReleaseRecord};

/// Prefix sums shifted by one: `out[i] = deltas[0] + .. + deltas[i - 1]`.
///
/// The output has the same length as the input and starts at 0, so each value
/// is the total *before* that release. The last delta never contributes.
pub fn cumulative_totals(deltas: &[u64]) -> Vec<u64> {
    deltas
        .iter()
        .scan(0u64, |total, &delta| {
            let before = *total;
            *total = total.saturating_add(delta);
            Some(before)
        })
        .collect()
}

pub fn cumulative_series(records: &[ReleaseRecord]) -> Vec<CumulativePoint> {
    let deltas: Vec<u64> = records.iter().map(|r| r.delta).collect();
    records
        .iter()
        .zip(cumulative_totals(&deltas))
        .map(|(r, cumulative_total)| CumulativePoint {
            date: r.date,
            cumulative_total,
        })
        .collect()
}
