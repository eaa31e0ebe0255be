use std::env;
use std::error::Error;
use std::fs::File;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::debug;
use mimalloc::MiMalloc;
use rec_common::logger::initialize_logger;
use rec_receiver::app::App;
use rec_receiver::cli::{Arguments, ReceiverAction};
use rec_receiver::configuration::{Configuration, DEFAULT_CONFIG_FILE};
use tokio::fs;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let arguments = Arguments::parse();

    let executable_path = env::current_exe()?;
    let app_directory = executable_path
        .parent()
        .ok_or("Failed to get application directory")?
        .to_path_buf();

    let configuration = Arc::new(Configuration::load(
        arguments.config.as_deref(),
        &app_directory.join(DEFAULT_CONFIG_FILE),
    )?);

    match arguments.command {
        ReceiverAction::Start => {
            let log_directory = app_directory.join("logs");
            fs::create_dir_all(&log_directory).await?;

            initialize_logger(
                configuration.log_level,
                File::create(log_directory.join(format!(
                    "rec-receiver-{}.log",
                    SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis()
                )))?,
            )?;
            debug!("Initialized logger");

            let app = App::new(configuration);
            app.run().await?;
        }
        ReceiverAction::ShowConfig => {
            println!("{}", serde_json::to_string_pretty(&*configuration)?);
        }
    }

    Ok(())
}
