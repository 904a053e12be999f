use serde::Serialize;
use std::collections::HashSet;

use crate::report::types::ReportRow;

/// Run-level counters for one processed input, logged as JSON.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub records_accepted: usize,
    pub report_rows: usize,
    pub series: usize,
}

impl RunSummary {
    /// Builds a summary from the parser's counters and the finished report.
    pub fn new(rows_read: usize, rows_skipped: usize, rows: &[ReportRow]) -> Self {
        let series = rows
            .iter()
            .map(|row| (row.border, row.measure.as_str()))
            .collect::<HashSet<_>>()
            .len();

        RunSummary {
            rows_read,
            rows_skipped,
            records_accepted: rows_read - rows_skipped,
            report_rows: rows.len(),
            series,
        }
    }
}
