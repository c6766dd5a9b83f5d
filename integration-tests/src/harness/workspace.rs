use chrono::NaiveDate;
use noaa_metrics_core::conf::Settings;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One access log line in the layout nginx writes for the download server.
pub fn log_line(date: NaiveDate, ip: &str, bytes: u64, path: &str, status: u16) -> String {
    format!(
        "[{}:12:30:00] GET https {ip} {bytes} {path} {status}",
        date.format("%d/%b/%Y")
    )
}

/// Settings whose every path lives under a private temporary directory.
pub struct TestWorkspace {
    dir: TempDir,
    pub settings: Settings,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.paths.access_log = dir.path().join("logs/download.log");
        settings.paths.json_output_dir = dir.path().join("json");
        settings.paths.report_output_dir = dir.path().join("reports");

        Self { dir, settings }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_log<S: AsRef<str>>(&self, lines: &[S]) {
        let path = &self.settings.paths.access_log;
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let body: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        fs::write(path, body.join("\n") + "\n").unwrap();
    }

    pub fn report_text(&self) -> String {
        fs::read_to_string(self.settings.report_output_path()).unwrap()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
