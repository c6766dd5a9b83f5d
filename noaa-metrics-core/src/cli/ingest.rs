use crate::classify::{DnsResolver, StaticResolver};
use crate::cli::{DEFAULT_CONFIG_DIR, parse_date};
use crate::conf::load_or_default;
use crate::period::ReportPeriod;
use crate::pipeline::ingest_logs;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// First day to ingest (YYYY-MM-DD or YYYYMMDD)
    #[arg(short = 's', long, value_parser = parse_date)]
    pub start_date: NaiveDate,

    /// Last day to ingest, inclusive
    #[arg(short = 'e', long, value_parser = parse_date)]
    pub end_date: NaiveDate,

    /// Path to config directory
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    pub config: PathBuf,

    /// Skip reverse DNS; every origin is recorded as unrecognized
    #[arg(long)]
    pub skip_dns: bool,
}

pub fn run_ingest(args: IngestArgs) -> Result<()> {
    let period = ReportPeriod::new(args.start_date, args.end_date)?;
    let settings = load_or_default(&args.config)?;

    let summary = if args.skip_dns {
        ingest_logs(&settings, StaticResolver::default(), &period)?
    } else {
        ingest_logs(&settings, DnsResolver::from_system_conf()?, &period)?
    };

    println!(
        "{} Ingested {} to {}",
        "✔".green(),
        period.start(),
        period.end()
    );
    println!("  lines read:   {}", summary.lines_read);
    println!("  records kept: {}", summary.records_kept);
    println!(
        "  daily files:  {} in {}",
        summary.days_written,
        settings.paths.json_output_dir.display()
    );

    Ok(())
}
