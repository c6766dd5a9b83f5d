use crate::conf::{CONFIG_FILE, ConfigError, Settings, load_config, load_or_default, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn parse(contents: &str) -> Result<Settings, ConfigError> {
    parse_config(contents, Path::new("test.hcl"))
}

#[test]
fn empty_file_yields_defaults() {
    let settings = parse("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn parses_every_section() {
    // Arrange
    let contents = r#"
paths = {
  access_log        = "/var/log/nginx/download.log"
  json_output_dir   = "/var/lib/noaa-metrics"
  report_output_dir = "/var/lib/noaa-metrics/reports"
  report_file_name  = "downloads.csv"
}

mail = {
  from      = "metrics@example.org"
  smtp_host = "relay.example.org"
  smtp_port = 2525
}

ingest = {
  allow_empty_days = true
}

locations = {
  "zz" = "Test Domain"
}
"#;

    // Act
    let settings = parse(contents).unwrap();

    // Assert
    assert_eq!(
        settings.paths.access_log,
        PathBuf::from("/var/log/nginx/download.log")
    );
    assert_eq!(
        settings.report_output_path(),
        PathBuf::from("/var/lib/noaa-metrics/reports/downloads.csv")
    );
    assert_eq!(settings.mail.smtp_host, "relay.example.org");
    assert_eq!(settings.mail.smtp_port, 2525);
    assert!(settings.ingest.allow_empty_days);
    assert_eq!(settings.locations.get("zz").map(String::as_str), Some("Test Domain"));
}

#[test]
fn block_syntax_is_accepted() {
    let contents = r#"
mail {
  smtp_port = 2525
}

ingest {
  allow_empty_days = true
}
"#;

    let settings = parse(contents).unwrap();

    assert_eq!(settings.mail.smtp_port, 2525);
    assert!(settings.ingest.allow_empty_days);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let settings = parse(
        r#"
mail = {
  smtp_host = "relay.example.org"
}
"#,
    )
    .unwrap();

    assert_eq!(settings.mail.smtp_host, "relay.example.org");
    assert_eq!(settings.mail.smtp_port, 25);
    assert_eq!(settings.mail.from, "archive@nusnow.colorado.edu");
    assert_eq!(settings.paths, Settings::default().paths);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse(
        r#"
mail = {
  smtp_hots = "relay.example.org"
}
"#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        (r#"mail = { smtp_port = 0 }"#, "mail.smtp_port"),
        (r#"mail = { from = "archive" }"#, "mail.from"),
        (r#"paths = { report_file_name = "" }"#, "paths.report_file_name"),
        (r#"paths = { report_file_name = "a/b.csv" }"#, "paths.report_file_name"),
        (r#"locations = { "edu" = "" }"#, "locations"),
    ];

    for (contents, expected) in cases {
        match parse(contents) {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }
}

#[test]
fn load_config_reads_from_the_config_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"ingest = { allow_empty_days = true }"#,
    )
    .unwrap();

    let settings = load_config(dir.path()).unwrap();

    assert!(settings.ingest.allow_empty_days);
}

#[test]
fn load_config_requires_the_file() {
    let dir = tempdir().unwrap();

    let err = load_config(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn load_or_default_tolerates_a_missing_file_only() {
    let dir = tempdir().unwrap();
    assert_eq!(load_or_default(dir.path()).unwrap(), Settings::default());

    fs::write(dir.path().join(CONFIG_FILE), "paths = {").unwrap();
    assert!(matches!(
        load_or_default(dir.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn bundled_template_is_a_valid_config() {
    let template = include_str!("../../../config-templates/noaa-metrics.hcl");

    let settings = parse(template).unwrap();

    assert_eq!(settings, Settings::default());
}
