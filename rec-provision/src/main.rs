use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use rec_common::logger::initialize_terminal_logger;
use rec_provision::cli::Arguments;
use rec_provision::provisioner::Provisioner;

fn main() -> ExitCode {
    let arguments = Arguments::parse();
    if let Err(e) = initialize_terminal_logger(arguments.log_level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let project_dir = match arguments.project_dir {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                error!("Unable to determine project directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let provisioner = Provisioner::new(project_dir);
    debug!("Provisioning {}", provisioner.project_dir().display());

    match provisioner.provision() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
