use crate::record::CrossingRecord;
use crate::report::types::{AggregateMap, CrossingKey};

/// Folds validated crossing records into summed totals per
/// (border, measure, timestamp).
///
/// Records sharing a key are summed, never overwritten. The fold produces
/// a fresh map rather than mutating a shared accumulator.
pub fn aggregate(records: impl IntoIterator<Item = CrossingRecord>) -> AggregateMap {
    records
        .into_iter()
        .fold(AggregateMap::new(), |mut totals, record| {
            let key = CrossingKey {
                border: record.border,
                measure: record.measure,
                timestamp: record.timestamp,
            };
            *totals.entry(key).or_insert(0) += record.value;
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Border;
    use chrono::NaiveDate;

    fn record(measure: &str, day: u32, value: u64) -> CrossingRecord {
        CrossingRecord {
            border: Border::UsCanada,
            measure: measure.to_string(),
            timestamp: NaiveDate::from_ymd_opt(2019, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            value,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_aggregate_sums_duplicate_keys() {
        let totals = aggregate(vec![record("Trucks", 1, 10), record("Trucks", 1, 5)]);

        assert_eq!(totals.len(), 1);
        let key = CrossingKey {
            border: Border::UsCanada,
            measure: "Trucks".to_string(),
            timestamp: record("Trucks", 1, 0).timestamp,
        };
        assert_eq!(totals[&key], 15);
    }

    #[test]
    fn test_aggregate_keeps_distinct_keys_apart() {
        let totals = aggregate(vec![
            record("Trucks", 1, 10),
            record("Trucks", 2, 20),
            record("Trains", 1, 7),
        ]);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals.values().sum::<u64>(), 37);
    }

    #[test]
    fn test_aggregate_distinguishes_borders() {
        let mut mexico = record("Trucks", 1, 4);
        mexico.border = Border::UsMexico;
        let totals = aggregate(vec![record("Trucks", 1, 10), mexico]);

        assert_eq!(totals.len(), 2);
    }
}
