mod check;
mod init;

pub use check::*;
use clap::Subcommand;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config directory
        #[arg(default_value = crate::cli::DEFAULT_CONFIG_DIR)]
        path: PathBuf,
    },

    /// Initialize a new config directory
    Init {
        /// Path to config directory
        #[arg(default_value = crate::cli::DEFAULT_CONFIG_DIR)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&path),
        ConfigCmd::Init { path } => init(&path),
    }
}
