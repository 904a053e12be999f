use crate::report::types::{GroupMap, ReportRow};
use crate::report::utility::round_half_even;

/// Emits one report row per series entry, annotated with the running
/// average of all strictly earlier totals in the same series.
///
/// Each series is explicitly sorted by timestamp first; insertion order is
/// never trusted to be chronological. The first entry of a series always
/// reports an average of zero. Averages round half-to-even.
pub fn compute(groups: GroupMap) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for (key, mut series) in groups {
        series.sort_by_key(|&(timestamp, _)| timestamp);

        let mut sum = 0u64;
        for (i, (timestamp, value)) in series.into_iter().enumerate() {
            let average = if i == 0 {
                0
            } else {
                round_half_even(sum, i as u64)
            };

            rows.push(ReportRow {
                border: key.border,
                timestamp,
                measure: key.measure.clone(),
                value,
                average,
            });

            sum += value;
        }
    }

    rows
}
