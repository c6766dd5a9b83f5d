use crate::conf::CONFIG_FILE;
use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: &Path) -> Result<()> {
    // Refuse to overwrite an existing non-empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(path)?.next().is_none();
        if !is_empty {
            bail!(
                "config directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let target = path.join(CONFIG_FILE);
    fs::write(&target, template(CONFIG_FILE)?)
        .with_context(|| format!("failed to write {}", target.display()))?;

    println!("✔ Initialized noaa-metrics config in {}", path.display());
    println!("✔ Created:");
    println!("  - {CONFIG_FILE}");
    println!();
    println!("Next steps:");
    println!("  noaa-metrics config check {}", path.display());
    println!(
        "  noaa-metrics ingest -s 2023-02-01 -e 2023-02-28 --config {}",
        path.display()
    );

    Ok(())
}

pub fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    String::from_utf8(file.data.into_owned()).context("config template is not valid UTF-8")
}
