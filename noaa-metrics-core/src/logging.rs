use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for cron runs and log shipping
    Json,
    /// Compact human-readable lines
    Text,
}

/// JSON unless stderr is an interactive terminal.
pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Text
    } else {
        LogFormat::Json
    }
}

pub fn init_logging() {
    init_logging_with(default_log_format());
}

/// Install the global subscriber. Filtering comes from `RUST_LOG`, defaulting
/// to "info". Events go to stderr; stdout carries command output only.
pub fn init_logging_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Text => builder.compact().with_target(false).init(),
    }
}
