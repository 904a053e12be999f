use tracing::debug;

use crate::record::CrossingRecord;
use crate::report::aggregate::aggregate;
use crate::report::average::compute;
use crate::report::groups::build_groups;
use crate::report::sorter::sort_report;
use crate::report::types::ReportRow;

/// Runs the full derivation over validated records: sum duplicate keys,
/// group per (border, measure), annotate running averages, and order the
/// rows for presentation.
///
/// Produces exactly one row per distinct (border, measure, timestamp) key.
pub fn build_report(records: Vec<CrossingRecord>) -> Vec<ReportRow> {
    let totals = aggregate(records);
    debug!(distinct_keys = totals.len(), "Crossing totals aggregated");

    let groups = build_groups(totals);
    debug!(series = groups.len(), "Totals grouped into series");

    sort_report(compute(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Border;
    use chrono::NaiveDate;

    fn record(day: u32, value: u64) -> CrossingRecord {
        CrossingRecord {
            border: Border::UsCanada,
            measure: "Trucks".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2019, day, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            value,
        }
    }

    #[test]
    fn test_build_report_sums_groups_and_sorts() {
        let rows = build_report(vec![record(1, 10), record(1, 5), record(2, 20)]);

        // Two distinct keys survive the duplicate-key summation.
        assert_eq!(rows.len(), 2);

        // Most recent first; the later month sees the earlier total as its average.
        assert_eq!(rows[0].value, 20);
        assert_eq!(rows[0].average, 15);
        assert_eq!(rows[1].value, 15);
        assert_eq!(rows[1].average, 0);
    }

    #[test]
    fn test_build_report_empty_input() {
        assert!(build_report(Vec::new()).is_empty());
    }

    #[test]
    fn test_row_count_matches_distinct_keys() {
        let mut records = Vec::new();
        for day in 1..=4 {
            records.push(record(day, day as u64));
            records.push(record(day, 1)); // duplicate key, summed
        }

        assert_eq!(build_report(records).len(), 4);
    }
}
