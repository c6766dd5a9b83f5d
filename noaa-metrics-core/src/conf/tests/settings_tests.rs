use crate::classify::{LocationTable, UNRECOGNIZED};
use crate::conf::Settings;
use chrono::NaiveDate;
use std::path::PathBuf;

#[test]
fn defaults_match_the_production_layout() {
    let settings = Settings::default();

    assert_eq!(
        settings.paths.access_log,
        PathBuf::from("/share/logs/noaa-web/download.log")
    );
    assert_eq!(
        settings.report_output_path(),
        PathBuf::from("/tmp/noaa-downloads.csv")
    );
    assert_eq!(settings.mail.smtp_host, "localhost");
    assert!(!settings.ingest.allow_empty_days);
}

#[test]
fn daily_store_uses_the_json_directory() {
    let mut settings = Settings::default();
    settings.paths.json_output_dir = PathBuf::from("/data/json");

    let store = settings.daily_store();

    assert_eq!(
        store.path_for(NaiveDate::from_ymd_opt(2023, 2, 17).unwrap()),
        PathBuf::from("/data/json/noaa-metrics-2023-02-17.json")
    );
}

#[test]
fn location_table_includes_configured_entries() {
    let mut settings = Settings::default();
    settings
        .locations
        .insert("zz".to_string(), "Test Domain".to_string());

    let table = settings.location_table();

    assert_eq!(table.locate(Some("a.example.zz")), "Test Domain");
    assert_eq!(table.locate(Some("a.example.qq")), UNRECOGNIZED);
    assert_eq!(table.len(), LocationTable::builtin().len() + 1);
}
