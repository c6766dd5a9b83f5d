use crate::error::MetricsError;
use crate::period::ReportPeriod;
use crate::record::EnrichedLogRecord;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of per-day JSON files, one `noaa-metrics-YYYY-MM-DD.json` per day.
#[derive(Debug, Clone)]
pub struct DailyStore {
    dir: PathBuf,
    allow_empty_days: bool,
}

impl DailyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            allow_empty_days: false,
        }
    }

    /// Skip missing or empty days with a warning instead of failing.
    pub fn allow_empty_days(mut self, allow: bool) -> Self {
        self.allow_empty_days = allow;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("noaa-metrics-{}.json", date.format("%Y-%m-%d")))
    }

    pub fn write_day(
        &self,
        date: NaiveDate,
        records: &[EnrichedLogRecord],
    ) -> Result<PathBuf, MetricsError> {
        fs::create_dir_all(&self.dir).map_err(|e| MetricsError::write_file(&self.dir, e))?;

        let path = self.path_for(date);
        let json = serde_json::to_string(records).map_err(|e| MetricsError::json(&path, e))?;
        fs::write(&path, json).map_err(|e| MetricsError::write_file(&path, e))?;

        tracing::debug!(path = %path.display(), records = records.len(), "wrote daily file");
        Ok(path)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn read_day(&self, date: NaiveDate) -> Result<Option<Vec<EnrichedLogRecord>>, MetricsError> {
        let path = self.path_for(date);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| MetricsError::read_file(&path, e))?;
        let records = serde_json::from_str(&contents).map_err(|e| MetricsError::json(&path, e))?;
        Ok(Some(records))
    }

    /// Every day of the period, concatenated oldest first.
    pub fn read_period(&self, period: &ReportPeriod) -> Result<Vec<EnrichedLogRecord>, MetricsError> {
        let mut all = Vec::new();

        for date in period.days() {
            match self.read_day(date)? {
                Some(records) if !records.is_empty() => {
                    tracing::debug!(%date, records = records.len(), "read daily file");
                    all.extend(records);
                }
                _ if self.allow_empty_days => {
                    tracing::warn!(%date, "no records for day, skipping");
                }
                _ => {
                    return Err(MetricsError::MissingPeriodData {
                        date,
                        path: self.path_for(date),
                    });
                }
            }
        }

        if all.is_empty() {
            return Err(MetricsError::EmptyPeriod {
                start: period.start(),
                end: period.end(),
            });
        }

        Ok(all)
    }
}
