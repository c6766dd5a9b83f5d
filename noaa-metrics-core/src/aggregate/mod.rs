//! Grouped download statistics
//!
//! Admissible records are partitioned along one [`AggregationDimension`] and
//! each partition is reduced to distinct requesters, files sent and byte
//! volume. A separate ungrouped pass produces [`SummaryStats`] for the whole
//! record set.
//!
//! records
//! aggregate(dimension)  -> AggregatedTable (rows + Total)
//! SummaryStats::compute -> SummaryStats

mod dimension;
mod table;

#[cfg(test)]
mod tests;

pub use dimension::AggregationDimension;
pub use table::{AggregatedRow, AggregatedTable, GroupStats, TOTAL_KEY};

use crate::record::EnrichedLogRecord;
use std::collections::BTreeMap;
use table::GroupAccumulator;

pub fn aggregate(records: &[EnrichedLogRecord], dimension: AggregationDimension) -> AggregatedTable {
    let mut groups = BTreeMap::new();
    for record in records {
        groups
            .entry(dimension.key(record))
            .or_insert_with(GroupAccumulator::default)
            .push(record);
    }

    let rows = groups
        .into_iter()
        .map(|(key, acc)| AggregatedRow {
            key: key.render(),
            stats: acc.finish(),
        })
        .collect();

    AggregatedTable::from_rows(dimension, rows)
}

/// Whole-period figures, computed without grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub distinct_users: u64,
    pub files_sent: u64,
    pub download_bytes: u64,
}

impl SummaryStats {
    pub fn compute(records: &[EnrichedLogRecord]) -> Self {
        let mut acc = GroupAccumulator::default();
        for record in records {
            acc.push(record);
        }

        let stats = acc.finish();
        Self {
            distinct_users: stats.distinct_users,
            files_sent: stats.files_sent,
            download_bytes: stats.download_bytes,
        }
    }
}

/// The three breakdown tables of a report, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdowns {
    pub by_date: AggregatedTable,
    pub by_dataset: AggregatedTable,
    pub by_location: AggregatedTable,
}

impl Breakdowns {
    pub fn compute(records: &[EnrichedLogRecord]) -> Self {
        Self {
            by_date: aggregate(records, AggregationDimension::ByDate),
            by_dataset: aggregate(records, AggregationDimension::ByDataset),
            by_location: aggregate(records, AggregationDimension::ByLocation),
        }
    }

    pub fn tables(&self) -> [&AggregatedTable; 3] {
        [&self.by_date, &self.by_dataset, &self.by_location]
    }
}
