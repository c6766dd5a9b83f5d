use crate::conf::{CONFIG_FILE, ConfigError, Settings, load_config};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(settings) => {
            print_summary(&settings);
            Ok(())
        }
        Err(err) => {
            if let Some(hint) = config_error_hint(&err) {
                eprintln!("{}: {}", "hint".yellow().bold(), hint);
            }
            Err(err.into())
        }
    }
}

fn print_summary(settings: &Settings) {
    let ok = "✔".green();
    println!("{ok} Config loaded successfully");
    println!("{ok} access log: {}", settings.paths.access_log.display());
    println!(
        "{ok} daily files: {}",
        settings.paths.json_output_dir.display()
    );
    println!("{ok} report: {}", settings.report_output_path().display());
    println!(
        "{ok} mail: {} via {}:{}",
        settings.mail.from, settings.mail.smtp_host, settings.mail.smtp_port
    );
    println!(
        "{ok} {} location entries ({} configured)",
        settings.location_table().len(),
        settings.locations.len()
    );
    if settings.ingest.allow_empty_days {
        println!("{} empty days are tolerated in reports", "!".yellow());
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<String> {
    match err {
        ConfigError::ReadFile { .. } => Some(format!(
            "create {CONFIG_FILE} with `noaa-metrics config init <dir>`"
        )),
        ConfigError::Parse { .. } => Some(
            "sections are HCL blocks or objects, e.g. `mail { smtp_port = 25 }`; \
             known sections are paths, mail, ingest and locations"
                .to_string(),
        ),
        ConfigError::InvalidValue { .. } => None,
    }
}
