pub mod conf;
mod dates;
mod ingest;
mod report;


pub use dates::parse_date;
pub use ingest::{IngestArgs, run_ingest};
pub use report::{ReportArgs, run_report};

/// Config directory used when `--config` is not given
pub const DEFAULT_CONFIG_DIR: &str = "config";
