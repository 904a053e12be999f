//! Output formatting and persistence for the derived report.
//!
//! Supports pretty-printing, JSON serialization, and CSV writing.

use anyhow::Result;
use tracing::{debug, info};

use crate::report::types::ReportRow;
use crate::summary::RunSummary;
use csv::WriterBuilder;
use std::fs::File;

/// Logs a run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    debug!("{:#?}", summary);
}

/// Logs a run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes report rows to a CSV file, replacing any existing file.
///
/// No header row is emitted; each line is
/// `border,timestamp,measure,value,average`.
pub fn write_report(path: &str, rows: &[ReportRow]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing report CSV");

    let file = File::create(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false) // the report format carries no header line
        .from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Border;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_row() -> ReportRow {
        ReportRow {
            border: Border::UsMexico,
            timestamp: NaiveDate::from_ymd_opt(2019, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            measure: "Pedestrians".to_string(),
            value: 346158,
            average: 245950,
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let summary = RunSummary::default();
        print_pretty(&summary);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let summary = RunSummary::default();
        print_json(&summary).unwrap();
    }

    #[test]
    fn test_write_report_renders_row_without_header() {
        let path = temp_path("border_crossing_report_test_render.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_report(&path, &[sample_row()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "US-Mexico Border,2019-03-01 00:00:00,Pedestrians,346158,245950\n"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_report_replaces_existing_file() {
        let path = temp_path("border_crossing_report_test_replace.csv");
        let _ = fs::remove_file(&path);

        write_report(&path, &[sample_row(), sample_row()]).unwrap();
        write_report(&path, &[sample_row()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_report_empty_rows_creates_empty_file() {
        let path = temp_path("border_crossing_report_test_empty.csv");
        let _ = fs::remove_file(&path);

        write_report(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());

        fs::remove_file(&path).unwrap();
    }
}
