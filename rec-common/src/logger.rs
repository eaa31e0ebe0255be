use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::{LevelFilter, SetLoggerError};
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_level_filter().as_str().to_lowercase())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!("Unknown log level {s:?}")),
        }
    }
}

fn _config() -> Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Debug)
        .build()
}

/// Log to `writer` and to the terminal (stderr).
pub fn initialize_logger<W>(level: LogLevel, writer: W) -> Result<(), SetLoggerError>
where
    W: Write + Send + 'static,
{
    CombinedLogger::init(vec![
        WriteLogger::new(level.to_level_filter(), _config(), writer),
        TermLogger::new(
            level.to_level_filter(),
            _config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    ])
}

/// Log to the terminal (stderr) only. Used by short-lived tools such as build hooks.
pub fn initialize_terminal_logger(level: LogLevel) -> Result<(), SetLoggerError> {
    TermLogger::init(
        level.to_level_filter(),
        _config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
