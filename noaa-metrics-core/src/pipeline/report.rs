use crate::aggregate::{Breakdowns, SummaryStats};
use crate::classify::DatasetSelector;
use crate::conf::Settings;
use crate::delivery::{Mailer, OutgoingReport};
use crate::error::MetricsError;
use crate::filter::RecordFilter;
use crate::period::ReportPeriod;
use crate::record::EnrichedLogRecord;
use crate::report::Report;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub period: ReportPeriod,
    pub dataset: DatasetSelector,
    /// Empty means write the report without mailing it
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub filename: String,
    pub subject: String,
    pub records: u64,
    pub recipients: usize,
}

/// Filter, aggregate and compose.
pub fn build_report(
    records: Vec<EnrichedLogRecord>,
    period: &ReportPeriod,
    dataset: &DatasetSelector,
) -> Report {
    let admissible = RecordFilter::new(period, dataset).apply(records);

    Report::compose(
        SummaryStats::compute(&admissible),
        Breakdowns::compute(&admissible),
        period,
        dataset,
    )
}

/// Build the report for `request`, write it to the configured output path and
/// mail it to the requested recipients.
///
/// Any previous report at the output path is removed first, so a failed run
/// leaves no report rather than a stale one.
pub fn generate_report<M: Mailer + ?Sized>(
    settings: &Settings,
    mailer: &M,
    request: &ReportRequest,
) -> Result<ReportOutcome, MetricsError> {
    let output = settings.report_output_path();
    remove_stale_report(&output)?;

    let records = settings.daily_store().read_period(&request.period)?;
    tracing::info!(
        records = records.len(),
        start = %request.period.start(),
        end = %request.period.end(),
        "loaded period records"
    );

    let report = build_report(records, &request.period, &request.dataset);
    let admitted = report.summary().map(|s| s.files_sent).unwrap_or_default();
    if admitted == 0 {
        tracing::warn!(dataset = ?request.dataset.label(), "no admissible records for report");
    }

    let document = report.render()?;
    write_report(&output, &document)?;
    tracing::info!(path = %output.display(), records = admitted, "report written");

    if !request.recipients.is_empty() {
        mailer.send(&OutgoingReport {
            recipients: request.recipients.clone(),
            subject: report.subject().to_string(),
            filename: report.filename().to_string(),
            body: document,
        })?;
    }

    Ok(ReportOutcome {
        path: output,
        filename: report.filename().to_string(),
        subject: report.subject().to_string(),
        records: admitted,
        recipients: request.recipients.len(),
    })
}

fn remove_stale_report(path: &Path) -> Result<(), MetricsError> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed previous report");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MetricsError::write_file(path, e)),
    }
}

fn write_report(path: &Path, document: &str) -> Result<(), MetricsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MetricsError::write_file(parent, e))?;
    }
    fs::write(path, document).map_err(|e| MetricsError::write_file(path, e))
}
