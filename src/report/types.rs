//! Data types used by the report pipeline.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::record::Border;

/// Rendered timestamp form used in the report, e.g. `2019-03-01 00:00:00`.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique aggregation key: one summed total exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrossingKey {
    pub border: Border,
    pub measure: String,
    pub timestamp: NaiveDateTime,
}

/// Summed crossing totals, built once by aggregation and read-only after.
pub type AggregateMap = HashMap<CrossingKey, u64>;

/// Identifies one reported series: a single crossing type at one border.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub border: Border,
    pub measure: String,
}

/// Per-series `(timestamp, total)` entries, unordered until the
/// running-average stage sorts them.
pub type GroupMap = HashMap<GroupKey, Vec<(NaiveDateTime, u64)>>;

/// One line of the final report. Field order is the emitted column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub border: Border,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub measure: String,
    pub value: u64,
    pub average: u64,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(REPORT_DATE_FORMAT))
}
