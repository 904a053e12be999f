use crate::report::types::{AggregateMap, GroupKey, GroupMap};

/// Reshapes summed totals into per-(border, measure) series.
///
/// Series are created lazily on first insertion. Entry order within a
/// series follows map iteration and carries no meaning; chronological
/// order is imposed downstream before any average is computed.
pub fn build_groups(totals: AggregateMap) -> GroupMap {
    totals
        .into_iter()
        .fold(GroupMap::new(), |mut groups, (key, total)| {
            groups
                .entry(GroupKey {
                    border: key.border,
                    measure: key.measure,
                })
                .or_default()
                .push((key.timestamp, total));
            groups
        })
}
