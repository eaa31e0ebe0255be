use std::path::PathBuf;

use clap::{Parser, Subcommand, crate_description, crate_version};

#[derive(Debug, Parser)]
#[command(
    long_about = crate_description!(),
    propagate_version = true,
    version = crate_version!(),
)]
pub struct Arguments {
    /// Path to the YAML configuration file.
    ///
    /// Defaults to `receiver-config.yml` next to the executable. Built-in defaults
    /// are used when that file does not exist.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ReceiverAction,
}

#[derive(Debug, Subcommand)]
#[clap(rename_all = "kebab_case")]
pub enum ReceiverAction {
    /// Start accepting uploads
    Start,

    /// Print the effective configuration as JSON and exit
    ShowConfig,
}
