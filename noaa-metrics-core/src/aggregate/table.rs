use super::dimension::AggregationDimension;
use crate::record::EnrichedLogRecord;
use ahash::AHashSet;

pub const TOTAL_KEY: &str = "Total";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub distinct_users: u64,
    pub files_sent: u64,
    pub download_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    pub key: String,
    pub stats: GroupStats,
}

/// One breakdown table: a row per group plus the synthetic total row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedTable {
    dimension: AggregationDimension,
    rows: Vec<AggregatedRow>,
    total: AggregatedRow,
}

impl AggregatedTable {
    /// The total row is the column-wise sum of `rows`.
    ///
    /// Note that summing distinct-user counts over-counts requesters that
    /// appear in more than one group. Existing reports carry this figure, so it
    /// is kept as is; the true count lives in `SummaryStats`.
    pub fn from_rows(dimension: AggregationDimension, rows: Vec<AggregatedRow>) -> Self {
        let total = rows.iter().fold(GroupStats::default(), |acc, row| GroupStats {
            distinct_users: acc.distinct_users + row.stats.distinct_users,
            files_sent: acc.files_sent + row.stats.files_sent,
            download_bytes: acc.download_bytes + row.stats.download_bytes,
        });

        Self {
            dimension,
            rows,
            total: AggregatedRow {
                key: TOTAL_KEY.to_string(),
                stats: total,
            },
        }
    }

    pub fn dimension(&self) -> AggregationDimension {
        self.dimension
    }

    /// Group rows, without the total.
    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn total(&self) -> &AggregatedRow {
        &self.total
    }

    /// Group rows followed by the total row.
    pub fn rows_with_total(&self) -> impl Iterator<Item = &AggregatedRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }
}

/// Running statistics for one group of records.
#[derive(Default)]
pub(crate) struct GroupAccumulator<'a> {
    requesters: AHashSet<&'a str>,
    files_sent: u64,
    download_bytes: u64,
}

impl<'a> GroupAccumulator<'a> {
    pub(crate) fn push(&mut self, record: &'a EnrichedLogRecord) {
        self.requesters.insert(&record.ip_address);
        self.files_sent += 1;
        self.download_bytes += record.download_bytes;
    }

    pub(crate) fn finish(self) -> GroupStats {
        GroupStats {
            distinct_users: self.requesters.len() as u64,
            files_sent: self.files_sent,
            download_bytes: self.download_bytes,
        }
    }
}
