use crate::classify::{Classifier, Dataset, LocationTable, StaticResolver, UNRECOGNIZED};
use crate::error::MetricsError;
use crate::record::RawLogRecord;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn raw(ip: &str, path: &str) -> RawLogRecord {
    RawLogRecord {
        date: NaiveDate::from_ymd_opt(2023, 2, 17).unwrap(),
        ip_address: ip.to_string(),
        download_bytes: 512,
        file_path: path.to_string(),
        status: "200".to_string(),
    }
}

#[test]
fn classify_assigns_dataset_and_location() {
    // Arrange
    let table = LocationTable::builtin();
    let resolver = StaticResolver::new([("128.138.135.20", "rain.colorado.edu")]);
    let classifier = Classifier::new(&table, resolver);

    // Act
    let record = classifier
        .classify(raw("128.138.135.20", "/NOAA/G02135/north.csv"))
        .unwrap();

    // Assert
    assert_eq!(record.dataset, Dataset::Noaa("G02135".to_string()));
    assert_eq!(record.ip_location, "Education (.edu)");
    assert_eq!(record.ip_address, "128.138.135.20");
    assert_eq!(record.download_bytes, 512);
    assert_eq!(record.status, "200");
}

#[test]
fn unresolvable_address_still_gets_a_location() {
    let table = LocationTable::builtin();
    let classifier = Classifier::new(&table, StaticResolver::default());

    let record = classifier.classify(raw("192.0.2.1", "/GPDP/a.txt")).unwrap();

    assert_eq!(record.ip_location, UNRECOGNIZED);
    assert!(!record.dataset.label().is_empty());
}

#[test]
fn unknown_dataset_fails_classification() {
    let table = LocationTable::builtin();
    let classifier = Classifier::new(&table, StaticResolver::default());

    let err = classifier
        .classify(raw("192.0.2.1", "/robots-like/thing.txt"))
        .unwrap_err();

    assert!(matches!(err, MetricsError::UnknownDataset { .. }));
}
