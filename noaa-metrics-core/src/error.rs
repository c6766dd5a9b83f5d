use crate::parse::LineError;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum MetricsError {
    // Ingestion
    #[error("malformed record on line {line_number}: {source}\n  {line}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        #[source]
        source: LineError,
    },

    #[error("no dataset rule matches path '{path}'")]
    UnknownDataset { path: String },

    // Reporting
    #[error("missing data for {date}: {path} does not exist or holds no records")]
    MissingPeriodData { date: NaiveDate, path: PathBuf },

    #[error("no records found between {start} and {end}")]
    EmptyPeriod { start: NaiveDate, end: NaiveDate },

    #[error("invalid reporting period: end date {end} is before start date {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    // IO / serialization
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render report table: {0}")]
    Render(#[from] csv::Error),

    // Collaborators
    #[error("failed to initialize DNS resolver: {0}")]
    Resolver(#[source] BoxError),

    #[error("failed to deliver report: {message}")]
    Delivery {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl MetricsError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn delivery(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            message: message.into(),
            source: Box::new(source),
        }
    }
}
