use crate::error::MetricsError;
use chrono::{Datelike, NaiveDate};

/// An inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, MetricsError> {
        if end < start {
            return Err(MetricsError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the period, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    pub fn within_one_month(&self) -> bool {
        self.start.year() == self.end.year() && self.start.month() == self.end.month()
    }
}
