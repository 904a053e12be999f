use crate::report::types::ReportRow;

/// Orders report rows most recent first, breaking timestamp ties by
/// descending value, then measure, then border.
///
/// The sort is stable, so rows equal on the full composite key keep their
/// encounter order.
pub fn sort_report(mut rows: Vec<ReportRow>) -> Vec<ReportRow> {
    rows.sort_by(|a, b| {
        (b.timestamp, b.value, b.measure.as_str(), b.border)
            .cmp(&(a.timestamp, a.value, a.measure.as_str(), a.border))
    });
    rows
}
