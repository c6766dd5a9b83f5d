
use crate::conf::Settings;
use crate::delivery::{Mailer, OutgoingReport};
use crate::error::MetricsError;
use crate::period::ReportPeriod;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::fs;
use std::path::Path;

pub(super) fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).unwrap()
}

pub(super) fn period(start: NaiveDate, end: NaiveDate) -> ReportPeriod {
    ReportPeriod::new(start, end).unwrap()
}

/// Settings rooted entirely inside `root`, with the access log written from `lines`.
pub(super) fn settings_in(root: &Path, lines: &[&str]) -> Settings {
    let mut settings = Settings::default();
    settings.paths.access_log = root.join("download.log");
    settings.paths.json_output_dir = root.join("json");
    settings.paths.report_output_dir = root.join("reports");
    fs::write(&settings.paths.access_log, lines.join("\n")).unwrap();
    settings
}

#[derive(Default)]
pub(super) struct RecordingMailer {
    pub sent: RefCell<Vec<OutgoingReport>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, report: &OutgoingReport) -> Result<(), MetricsError> {
        self.sent.borrow_mut().push(report.clone());
        Ok(())
    }
}
