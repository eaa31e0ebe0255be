use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use config_file::FromConfigFile;
use rec_common::error::RuntimeError;
use rec_common::logger::LogLevel;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "receiver-config.yml";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: LogLevel,
    pub upload_directory: PathBuf,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            log_level: LogLevel::Info,
            upload_directory: PathBuf::from("wav_uploads"),
        }
    }
}

impl Configuration {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load `explicit` if given (it must exist). Otherwise load `fallback` when it
    /// exists, or use the built-in defaults.
    pub fn load(explicit: Option<&Path>, fallback: &Path) -> Result<Self, RuntimeError> {
        let path = match explicit {
            Some(path) => path,
            None if fallback.is_file() => fallback,
            None => return Ok(Self::default()),
        };

        Self::from_config_file(path).map_err(|e| {
            RuntimeError::new(format!(
                "Failed to load configuration from {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.upload_directory, Path::new("wav_uploads"));
    }

    #[test]
    fn test_missing_fallback_uses_defaults() {
        let config = Configuration::load(None, Path::new("/nonexistent/receiver-config.yml"))
            .unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/receiver-config.yml");
        assert!(Configuration::load(Some(path), path).is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
        file.write_all(b"port: 8080\nlog_level: Debug\n").unwrap();
        file.flush().unwrap();

        let config = Configuration::load(Some(file.path()), file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.upload_directory, Path::new("wav_uploads"));
    }
}
