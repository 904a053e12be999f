//! CSV parser and row-level validation for raw crossing data.
//!
//! The published data set carries more columns than this tool needs; rows
//! are decoded by header name and only `Border`, `Date`, `Measure`, and
//! `Value` are read. Malformed rows are skipped with a warning naming the
//! row position and the offending field.

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::warn;

use crate::record::{Border, CrossingRecord};

/// Timestamp format used by the raw data, e.g. `03/01/2019 12:00:00 AM`.
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Raw string fields of one CSV row, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Border")]
    border: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Measure")]
    measure: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Validated records plus row-level counters for the run summary.
#[derive(Debug, Default)]
pub struct ParsedInput {
    pub records: Vec<CrossingRecord>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Decodes a headered crossing CSV from raw bytes.
///
/// Rows that fail validation are skipped, never fatal; every accepted
/// record satisfies the field constraints the rest of the pipeline
/// assumes.
///
/// # Errors
///
/// Returns an error only if the byte stream is not readable as CSV at all.
pub fn parse_records(bytes: &[u8]) -> Result<ParsedInput> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut parsed = ParsedInput::default();

    for (row, result) in rdr.deserialize().enumerate() {
        parsed.rows_read += 1;

        let raw: RawRow = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!(row, error = %e, "Row is not decodable, skipping");
                parsed.rows_skipped += 1;
                continue;
            }
        };

        match validate_row(row, &raw) {
            Some(record) => parsed.records.push(record),
            None => parsed.rows_skipped += 1,
        }
    }

    Ok(parsed)
}

/// Checks one raw row field by field, logging the first offending field.
fn validate_row(row: usize, raw: &RawRow) -> Option<CrossingRecord> {
    let border: Border = match raw.border.parse() {
        Ok(border) => border,
        Err(_) => {
            warn!(row, border = %raw.border, "Row has invalid border, skipping");
            return None;
        }
    };

    let timestamp = match NaiveDateTime::parse_from_str(&raw.date, INPUT_DATE_FORMAT) {
        Ok(timestamp) => timestamp,
        Err(_) => {
            warn!(row, date = %raw.date, "Row has invalid date, skipping");
            return None;
        }
    };

    let value: u64 = match raw.value.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(row, value = %raw.value, "Row has invalid value, skipping");
            return None;
        }
    };

    Some(CrossingRecord {
        border,
        measure: raw.measure.clone(),
        timestamp,
        value,
    })
}
