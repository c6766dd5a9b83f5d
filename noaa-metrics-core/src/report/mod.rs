//! Report composition
//!
//! A report is the summary block followed by the day, dataset and domain
//! breakdowns, titled after the reporting period. Composition is a pure
//! function of its inputs, so rebuilding a report yields identical output.

mod render;
mod title;


pub use render::render_csv;
pub use title::ReportNaming;

use crate::aggregate::{AggregatedTable, Breakdowns, SummaryStats};
use crate::classify::DatasetSelector;
use crate::error::MetricsError;
use crate::period::ReportPeriod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSection {
    Summary(SummaryStats),
    Breakdown(AggregatedTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    naming: ReportNaming,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn compose(
        summary: SummaryStats,
        breakdowns: Breakdowns,
        period: &ReportPeriod,
        dataset: &DatasetSelector,
    ) -> Self {
        let Breakdowns {
            by_date,
            by_dataset,
            by_location,
        } = breakdowns;

        Self {
            naming: ReportNaming::new(period, dataset),
            sections: vec![
                ReportSection::Summary(summary),
                ReportSection::Breakdown(by_date),
                ReportSection::Breakdown(by_dataset),
                ReportSection::Breakdown(by_location),
            ],
        }
    }

    pub fn title(&self) -> &str {
        &self.naming.title
    }

    pub fn subject(&self) -> &str {
        &self.naming.subject
    }

    pub fn filename(&self) -> &str {
        &self.naming.filename
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn summary(&self) -> Option<&SummaryStats> {
        self.sections.iter().find_map(|section| match section {
            ReportSection::Summary(stats) => Some(stats),
            ReportSection::Breakdown(_) => None,
        })
    }

    pub fn render(&self) -> Result<String, MetricsError> {
        render_csv(self)
    }
}
