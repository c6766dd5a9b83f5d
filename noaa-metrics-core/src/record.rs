use crate::classify::Dataset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One access-log line, tokenized but not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLogRecord {
    pub date: NaiveDate,
    pub ip_address: String,
    pub download_bytes: u64,
    pub file_path: String,
    /// HTTP status code exactly as it appeared in the log
    pub status: String,
}

/// A raw record plus its dataset and origin labels.
///
/// This is also the on-disk shape of the per-day JSON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedLogRecord {
    pub date: NaiveDate,
    pub ip_address: String,
    pub download_bytes: u64,
    pub dataset: Dataset,
    pub file_path: String,
    pub ip_location: String,

    /// Older daily files were written with successful requests only and carry
    /// no status field.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "200".to_string()
}

impl EnrichedLogRecord {
    pub fn from_raw(raw: RawLogRecord, dataset: Dataset, ip_location: String) -> Self {
        Self {
            date: raw.date,
            ip_address: raw.ip_address,
            download_bytes: raw.download_bytes,
            dataset,
            file_path: raw.file_path,
            ip_location,
            status: raw.status,
        }
    }
}
