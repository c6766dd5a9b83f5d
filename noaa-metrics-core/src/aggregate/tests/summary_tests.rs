use super::{download, sample};
use crate::aggregate::SummaryStats;
use crate::classify::Dataset;
use pretty_assertions::assert_eq;

#[test]
fn summary_counts_true_distinct_requesters() {
    let summary = SummaryStats::compute(&sample());

    assert_eq!(
        summary,
        SummaryStats {
            distinct_users: 2,
            files_sent: 5,
            download_bytes: 1500,
        }
    );
}

#[test]
fn summary_of_nothing_is_zero() {
    assert_eq!(SummaryStats::compute(&[]), SummaryStats::default());
}

#[test]
fn zero_byte_downloads_still_count_as_files() {
    let records = vec![
        download(17, "10.0.0.1", Dataset::Gpdp, "x", 0),
        download(17, "10.0.0.1", Dataset::Gpdp, "x", 0),
    ];

    let summary = SummaryStats::compute(&records);

    assert_eq!(summary.files_sent, 2);
    assert_eq!(summary.download_bytes, 0);
    assert_eq!(summary.distinct_users, 1);
}
