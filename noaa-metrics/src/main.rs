use clap::{Parser, Subcommand};
use noaa_metrics_core::cli::{self, IngestArgs, ReportArgs};
use noaa_metrics_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "noaa-metrics",
    version,
    about = "Download metrics for the NOAA@NSIDC archive"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and classify the access log into per-day JSON files
    Ingest(IngestArgs),

    /// Build the CSV report for a period and optionally mail it
    Report(ReportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Ingest(args) => cli::run_ingest(args),
        Command::Report(args) => cli::run_report(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{e:#}"), "run failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
