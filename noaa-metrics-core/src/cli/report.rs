use crate::classify::DatasetSelector;
use crate::cli::{DEFAULT_CONFIG_DIR, parse_date};
use crate::conf::load_or_default;
use crate::period::ReportPeriod;
use crate::pipeline::{ReportRequest, generate_report};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// First day of the reporting period (YYYY-MM-DD or YYYYMMDD)
    #[arg(short = 's', long, value_parser = parse_date)]
    pub start_date: NaiveDate,

    /// Last day of the reporting period, inclusive
    #[arg(short = 'e', long, value_parser = parse_date)]
    pub end_date: NaiveDate,

    /// Mail the report to this address (repeatable)
    #[arg(short = 'm', long = "mailto", value_name = "ADDR")]
    pub mailto: Vec<String>,

    /// Restrict the report to one dataset
    #[arg(short = 'd', long, default_value = "all")]
    pub dataset: String,

    /// Path to config directory
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    pub config: PathBuf,
}

impl ReportArgs {
    pub fn request(&self) -> Result<ReportRequest> {
        Ok(ReportRequest {
            period: ReportPeriod::new(self.start_date, self.end_date)?,
            dataset: DatasetSelector::parse(&self.dataset),
            recipients: self.mailto.clone(),
        })
    }
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let request = args.request()?;
    let settings = load_or_default(&args.config)?;
    let mailer = settings.mailer();

    let outcome = generate_report(&settings, &mailer, &request)?;

    println!("{} {}", "✔".green(), outcome.subject);
    println!("  records: {}", outcome.records);
    println!("  written: {}", outcome.path.display());
    if outcome.recipients > 0 {
        println!(
            "  mailed:  {} as {} to {} recipient(s)",
            outcome.filename, outcome.subject, outcome.recipients
        );
    }

    Ok(())
}
