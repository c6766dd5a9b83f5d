//! Run-level entry points
//!
//! ingest: access log -> parse -> pre-filter -> classify -> per-day JSON files
//! report: per-day JSON files -> filter -> aggregate -> compose -> CSV file -> mail

mod ingest;
mod report;

#[cfg(test)]
mod tests;

pub use ingest::{IngestSummary, ingest_lines, ingest_logs};
pub use report::{ReportOutcome, ReportRequest, build_report, generate_report};
