//! Domain types for a single border-crossing observation.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A land border in the published crossing data.
///
/// Variants are declared in the lexicographic order of their rendered
/// names, so the derived [`Ord`] agrees with comparing the strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Border {
    UsCanada,
    UsMexico,
}

impl Border {
    pub fn as_str(&self) -> &'static str {
        match self {
            Border::UsCanada => "US-Canada Border",
            Border::UsMexico => "US-Mexico Border",
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Border {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US-Canada Border" => Ok(Border::UsCanada),
            "US-Mexico Border" => Ok(Border::UsMexico),
            other => anyhow::bail!("unknown border: {other}"),
        }
    }
}

impl Serialize for Border {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One validated crossing event: `value` crossings of type `measure`
/// observed at `border` during the period starting at `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingRecord {
    pub border: Border,
    pub measure: String,
    pub timestamp: NaiveDateTime,
    pub value: u64,
}
