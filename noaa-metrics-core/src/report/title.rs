use crate::classify::DatasetSelector;
use crate::period::ReportPeriod;
use chrono::{Datelike, NaiveDate};

const TITLE_PREFIX: &str = "NOAA Downloads";
const FILE_PREFIX: &str = "NOAA";

/// Period-derived names for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNaming {
    /// First line of the document
    pub title: String,
    /// Mail subject
    pub subject: String,
    /// Attachment file name
    pub filename: String,
}

impl ReportNaming {
    pub fn new(period: &ReportPeriod, dataset: &DatasetSelector) -> Self {
        let start_month = month_name(period.start());
        let end_month = month_name(period.end());
        let year = period.start().year();

        let (months, file_months) = if period.within_one_month() {
            (start_month.clone(), start_month)
        } else {
            (
                format!("{start_month} - {end_month}"),
                format!("{start_month}-{end_month}"),
            )
        };

        let (title_dataset, file_dataset) = match dataset.label() {
            Some(label) => (format!("{label} "), format!("{label}-")),
            None => (String::new(), String::new()),
        };

        Self {
            title: format!("{TITLE_PREFIX} {title_dataset}{months}"),
            subject: format!("{TITLE_PREFIX} {title_dataset}{months} {year}"),
            filename: format!("{FILE_PREFIX}-{file_dataset}{file_months}-{year}.csv"),
        }
    }
}

fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
