use crate::classify::LocationTable;
use crate::delivery::SmtpMailer;
use crate::store::DailyStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything a run needs to know about its environment.
///
/// Passed explicitly into the ingest and report entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub ingest: IngestConfig,

    /// Host-name suffix -> origin label, layered over the built-in table
    #[serde(default)]
    pub locations: BTreeMap<String, String>,
}

impl Settings {
    pub fn report_output_path(&self) -> PathBuf {
        self.paths
            .report_output_dir
            .join(&self.paths.report_file_name)
    }

    pub fn daily_store(&self) -> DailyStore {
        DailyStore::new(&self.paths.json_output_dir)
            .allow_empty_days(self.ingest.allow_empty_days)
    }

    pub fn location_table(&self) -> LocationTable {
        LocationTable::with_overrides(&self.locations)
    }

    pub fn mailer(&self) -> SmtpMailer {
        SmtpMailer::new(&self.mail.from, &self.mail.smtp_host, self.mail.smtp_port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_access_log")]
    pub access_log: PathBuf,

    #[serde(default = "default_output_dir")]
    pub json_output_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub report_output_dir: PathBuf,

    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            access_log: default_access_log(),
            json_output_dir: default_output_dir(),
            report_output_dir: default_output_dir(),
            report_file_name: default_report_file_name(),
        }
    }
}

fn default_access_log() -> PathBuf {
    PathBuf::from("/share/logs/noaa-web/download.log")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

fn default_report_file_name() -> String {
    "noaa-downloads.csv".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    #[serde(default = "default_from")]
    pub from: String,

    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from: default_from(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
        }
    }
}

fn default_from() -> String {
    "archive@nusnow.colorado.edu".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    25
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    /// Treat missing or empty daily files as "no traffic" instead of an error
    #[serde(default)]
    pub allow_empty_days: bool,
}
