use super::{Report, ReportSection};
use crate::aggregate::{AggregatedTable, SummaryStats};
use crate::error::MetricsError;
use csv::{Terminator, Writer, WriterBuilder};

const VALUE_HEADERS: [&str; 3] = ["Distinct Users", "Files Sent", "Download Volume (MB)"];

/// Render the report as one CSV document.
///
/// ```text
/// <title>
///
/// ,Values
/// Files Transmitted During Summary Period,5
/// ...
///
/// Transfers by Day
///
/// Date,Distinct Users,Files Sent,Download Volume (MB)
/// 17 Feb 2023,2,3,900
/// Total,2,3,900
/// ...
/// ```
pub fn render_csv(report: &Report) -> Result<String, MetricsError> {
    let mut out = String::new();
    out.push_str(report.title());
    out.push_str("\n\n");

    for section in report.sections() {
        match section {
            ReportSection::Summary(stats) => out.push_str(&summary_csv(stats)?),
            ReportSection::Breakdown(table) => {
                out.push('\n');
                out.push_str(table.dimension().section_title());
                out.push_str("\n\n");
                out.push_str(&table_csv(table)?);
            }
        }
    }

    Ok(out)
}

fn summary_csv(stats: &SummaryStats) -> Result<String, MetricsError> {
    let mut wtr = writer();
    wtr.write_record(["", "Values"])?;
    wtr.write_record([
        "Files Transmitted During Summary Period".to_string(),
        stats.files_sent.to_string(),
    ])?;
    wtr.write_record([
        "Volume in MB of files Transmitted During Summary Period".to_string(),
        stats.download_bytes.to_string(),
    ])?;
    wtr.write_record([
        "Users Connecting During Summary Period".to_string(),
        stats.distinct_users.to_string(),
    ])?;
    finish(wtr)
}

fn table_csv(table: &AggregatedTable) -> Result<String, MetricsError> {
    let mut wtr = writer();

    let mut header = vec![table.dimension().column_header()];
    header.extend(VALUE_HEADERS);
    wtr.write_record(&header)?;

    for row in table.rows_with_total() {
        wtr.write_record([
            row.key.clone(),
            row.stats.distinct_users.to_string(),
            row.stats.files_sent.to_string(),
            row.stats.download_bytes.to_string(),
        ])?;
    }
    finish(wtr)
}

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(wtr: Writer<Vec<u8>>) -> Result<String, MetricsError> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
