mod error;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{CONFIG_FILE, load_config, load_or_default, parse_config};
pub use types::{IngestConfig, MailConfig, PathsConfig, Settings};
