use crate::record::EnrichedLogRecord;
use chrono::NaiveDate;

const DATE_KEY_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationDimension {
    ByDate,
    ByDataset,
    ByLocation,
}

impl AggregationDimension {
    /// Report order.
    pub const ALL: [AggregationDimension; 3] = [
        AggregationDimension::ByDate,
        AggregationDimension::ByDataset,
        AggregationDimension::ByLocation,
    ];

    /// Header of the key column in rendered tables.
    pub fn column_header(&self) -> &'static str {
        match self {
            AggregationDimension::ByDate => "Date",
            AggregationDimension::ByDataset => "Dataset",
            AggregationDimension::ByLocation => "Domain Type",
        }
    }

    /// Header line printed above the table in a report.
    pub fn section_title(&self) -> &'static str {
        match self {
            AggregationDimension::ByDate => "Transfers by Day",
            AggregationDimension::ByDataset => "Transfers by Dataset",
            AggregationDimension::ByLocation => "Transfers by Domain",
        }
    }

    pub(crate) fn key<'a>(&self, record: &'a EnrichedLogRecord) -> GroupKey<'a> {
        match self {
            AggregationDimension::ByDate => GroupKey::Date(record.date),
            AggregationDimension::ByDataset => GroupKey::Label(record.dataset.label()),
            AggregationDimension::ByLocation => GroupKey::Label(&record.ip_location),
        }
    }
}

/// Partition key. Dates order chronologically, labels lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum GroupKey<'a> {
    Date(NaiveDate),
    Label(&'a str),
}

impl GroupKey<'_> {
    pub(crate) fn render(&self) -> String {
        match self {
            GroupKey::Date(date) => date.format(DATE_KEY_FORMAT).to_string(),
            GroupKey::Label(label) => label.to_string(),
        }
    }
}
