mod summary_tests;

use crate::classify::Dataset;
use crate::record::EnrichedLogRecord;
use chrono::NaiveDate;

/// Helper: a successful download on 2023-02-`day`
pub(super) fn download(
    day: u32,
    ip: &str,
    dataset: Dataset,
    location: &str,
    bytes: u64,
) -> EnrichedLogRecord {
    EnrichedLogRecord {
        date: NaiveDate::from_ymd_opt(2023, 2, day).unwrap(),
        ip_address: ip.to_string(),
        download_bytes: bytes,
        file_path: format!("/{}/file-{day}.bin", dataset.label()),
        dataset,
        ip_location: location.to_string(),
        status: "200".to_string(),
    }
}

/// Helper: two requesters across two days, three datasets and two origins
pub(super) fn sample() -> Vec<EnrichedLogRecord> {
    vec![
        download(18, "10.0.0.1", Dataset::Gpdp, "Education (.edu)", 100),
        download(17, "10.0.0.1", Dataset::Nsidc0057, "Education (.edu)", 200),
        download(17, "10.0.0.2", Dataset::Noaa("G02135".into()), "Unrecognized", 300),
        download(17, "10.0.0.2", Dataset::Noaa("G02135".into()), "Unrecognized", 400),
        download(18, "10.0.0.2", Dataset::Gpdp, "Unrecognized", 500),
    ]
}
