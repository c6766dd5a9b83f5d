use crate::conf::error::ConfigError;
use crate::conf::types::Settings;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "noaa-metrics.hcl";

/// Load and validate `<root>/noaa-metrics.hcl`.
pub fn load_config(root: &Path) -> Result<Settings, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    parse_config(&contents, &path)
}

/// Like [`load_config`], but a missing config file yields the built-in
/// defaults. A file that exists and fails to parse is still an error.
pub fn load_or_default(root: &Path) -> Result<Settings, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        return Ok(Settings::default());
    }
    load_config(root)
}

pub fn parse_config(contents: &str, path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = hcl::from_str(contents).map_err(|e| ConfigError::parse(path, e))?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.paths.report_file_name.trim().is_empty() {
        return Err(ConfigError::invalid(
            "paths.report_file_name",
            "must not be empty",
        ));
    }

    if settings.paths.report_file_name.contains('/') {
        return Err(ConfigError::invalid(
            "paths.report_file_name",
            "must be a file name, not a path",
        ));
    }

    if !settings.mail.from.contains('@') {
        return Err(ConfigError::invalid(
            "mail.from",
            format!("'{}' is not an email address", settings.mail.from),
        ));
    }

    if settings.mail.smtp_port == 0 {
        return Err(ConfigError::invalid("mail.smtp_port", "must be non-zero"));
    }

    if let Some((suffix, _)) = settings
        .locations
        .iter()
        .find(|(suffix, label)| suffix.trim_matches('.').is_empty() || label.trim().is_empty())
    {
        return Err(ConfigError::invalid(
            "locations",
            format!("entry '{suffix}' needs a non-empty suffix and label"),
        ));
    }

    Ok(())
}
