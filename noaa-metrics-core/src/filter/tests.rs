use crate::classify::{Dataset, DatasetSelector};
use crate::filter::{RecordFilter, is_excluded_path, is_success_status};
use crate::period::ReportPeriod;
use crate::record::EnrichedLogRecord;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 2, d).unwrap()
}

fn record(day: u32, path: &str, dataset: Dataset, status: &str) -> EnrichedLogRecord {
    EnrichedLogRecord {
        date: date(day),
        ip_address: "192.0.2.1".to_string(),
        download_bytes: 100,
        dataset,
        file_path: path.to_string(),
        ip_location: "Unrecognized".to_string(),
        status: status.to_string(),
    }
}

fn sample() -> Vec<EnrichedLogRecord> {
    vec![
        record(1, "/GPDP/a.txt", Dataset::Gpdp, "200"),
        record(10, "/GPDP/b.txt", Dataset::Gpdp, "206"),
        record(10, "/GPDP/missing.txt", Dataset::Gpdp, "404"),
        record(11, "/robots.txt", Dataset::Gpdp, "200"),
        record(12, "/nsidc-0057/c.bin", Dataset::Nsidc0057, "200"),
        record(20, "/GPDP/late.txt", Dataset::Gpdp, "200"),
    ]
}

#[test]
fn success_status_is_the_2xx_class() {
    assert!(is_success_status("200"));
    assert!(is_success_status("206"));
    assert!(!is_success_status("304"));
    assert!(!is_success_status("404"));
    assert!(!is_success_status(""));
}

#[test]
fn robots_resource_is_excluded_wherever_it_lives() {
    assert!(is_excluded_path("/robots.txt"));
    assert!(is_excluded_path("/NOAA/G02135/robots.txt"));
    assert!(is_excluded_path("robots.txt"));
    assert!(!is_excluded_path("/NOAA/G02135/robots.txt.bak"));
    assert!(!is_excluded_path("/GPDP/not-robots.txt"));
}

#[test]
fn robots_resource_with_query_is_excluded() {
    assert!(is_excluded_path("/robots.txt?x=1"));
    assert!(is_excluded_path("/NOAA/G02135/robots.txt?"));
    assert!(!is_excluded_path("/GPDP/a.txt?next=/robots.txt"));
}

#[test]
fn keeps_only_successful_in_period_non_robots_records() {
    // Arrange
    let period = ReportPeriod::new(date(1), date(12)).unwrap();
    let selector = DatasetSelector::All;
    let filter = RecordFilter::new(&period, &selector);

    // Act
    let kept = filter.apply(sample());

    // Assert
    let paths: Vec<_> = kept.iter().map(|r| r.file_path.as_str()).collect();
    assert_eq!(paths, vec!["/GPDP/a.txt", "/GPDP/b.txt", "/nsidc-0057/c.bin"]);
}

#[test]
fn dataset_selector_narrows_the_result() {
    let period = ReportPeriod::new(date(1), date(28)).unwrap();
    let selector = DatasetSelector::parse("nsidc-0057");
    let filter = RecordFilter::new(&period, &selector);

    let kept = filter.apply(sample());

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].dataset, Dataset::Nsidc0057);
}

#[test]
fn filtering_is_idempotent() {
    let period = ReportPeriod::new(date(1), date(15)).unwrap();
    let selector = DatasetSelector::parse("GPDP");
    let filter = RecordFilter::new(&period, &selector);

    let once = filter.apply(sample());
    let twice = filter.apply(once.clone());

    assert_eq!(once, twice);
}
