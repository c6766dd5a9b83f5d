use crate::classify::{CachingResolver, Classifier, HostnameResolver};
use crate::conf::Settings;
use crate::error::MetricsError;
use crate::filter::{is_excluded_path, is_success_status};
use crate::parse::parse_lines;
use crate::period::ReportPeriod;
use crate::record::{EnrichedLogRecord, RawLogRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines_read: usize,
    pub records_kept: usize,
    pub days_written: usize,
}

/// Parse every line, then classify the successful, non-robots downloads that
/// fall inside `period`.
///
/// Requests outside that set are never classified, so failed hits on
/// arbitrary paths cannot abort a run with `UnknownDataset`.
pub fn ingest_lines<'a, I, R>(
    lines: I,
    classifier: &Classifier<'_, R>,
    period: &ReportPeriod,
) -> Result<Vec<EnrichedLogRecord>, MetricsError>
where
    I: IntoIterator<Item = &'a str>,
    R: HostnameResolver,
{
    parse_lines(lines)?
        .into_iter()
        .filter(|raw| is_ingestible(raw, period))
        .map(|raw| classifier.classify(raw))
        .collect()
}

fn is_ingestible(raw: &RawLogRecord, period: &ReportPeriod) -> bool {
    period.contains(raw.date) && is_success_status(&raw.status) && !is_excluded_path(&raw.file_path)
}

/// Ingest the configured access log and write one daily file for every day of
/// `period`, including days without traffic.
///
/// Nothing is written unless the whole log parses and classifies.
pub fn ingest_logs<R: HostnameResolver>(
    settings: &Settings,
    resolver: R,
    period: &ReportPeriod,
) -> Result<IngestSummary, MetricsError> {
    let log_path = &settings.paths.access_log;
    tracing::info!(
        log = %log_path.display(),
        start = %period.start(),
        end = %period.end(),
        "ingesting access log"
    );

    let contents = fs::read_to_string(log_path).map_err(|e| MetricsError::read_file(log_path, e))?;
    let lines_read = contents.lines().count();

    let locations = settings.location_table();
    let classifier = Classifier::new(&locations, CachingResolver::new(resolver));
    let records = ingest_lines(contents.lines(), &classifier, period)?;
    let records_kept = records.len();

    let mut by_day: BTreeMap<NaiveDate, Vec<EnrichedLogRecord>> = BTreeMap::new();
    for record in records {
        by_day.entry(record.date).or_default().push(record);
    }

    let store = settings.daily_store();
    let mut days_written = 0;
    for day in period.days() {
        let records = by_day.remove(&day).unwrap_or_default();
        store.write_day(day, &records)?;
        days_written += 1;
    }

    tracing::info!(
        lines_read,
        records_kept,
        days_written,
        addresses_resolved = classifier.resolver().cached_addresses(),
        "ingest complete"
    );

    Ok(IngestSummary {
        lines_read,
        records_kept,
        days_written,
    })
}
