use std::path::PathBuf;

use clap::{Parser, crate_description, crate_version};
use rec_common::logger::LogLevel;

#[derive(Debug, Parser)]
#[command(
    long_about = crate_description!(),
    propagate_version = true,
    version = crate_version!(),
)]
pub struct Arguments {
    /// Root directory of the project being built.
    ///
    /// `.env` (or `.env.example` as a fallback) is read from this directory and
    /// copied to `data/.env` inside it. Defaults to the current working directory.
    #[arg(long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Minimum level of log messages to print
    #[arg(long, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
