use crate::classify::DatasetSelector;
use crate::period::ReportPeriod;
use crate::record::EnrichedLogRecord;

const ROBOTS_RESOURCE: &str = "robots.txt";

/// HTTP 2xx.
pub fn is_success_status(status: &str) -> bool {
    status.starts_with('2')
}

/// Crawler bookkeeping requests are never counted as downloads. Any query
/// string is ignored.
pub fn is_excluded_path(path: &str) -> bool {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    path.rsplit('/').next() == Some(ROBOTS_RESOURCE)
}

/// Decides which enriched records count towards a report.
///
/// All predicates are conjunctive. Rejected records are dropped silently.
#[derive(Debug, Clone)]
pub struct RecordFilter<'a> {
    period: &'a ReportPeriod,
    dataset: &'a DatasetSelector,
}

impl<'a> RecordFilter<'a> {
    pub fn new(period: &'a ReportPeriod, dataset: &'a DatasetSelector) -> Self {
        Self { period, dataset }
    }

    pub fn admits(&self, record: &EnrichedLogRecord) -> bool {
        is_success_status(&record.status)
            && self.period.contains(record.date)
            && !is_excluded_path(&record.file_path)
            && self.dataset.matches(&record.dataset)
    }

    pub fn apply(&self, records: Vec<EnrichedLogRecord>) -> Vec<EnrichedLogRecord> {
        records.into_iter().filter(|r| self.admits(r)).collect()
    }
}

#[cfg(test)]
mod tests;
