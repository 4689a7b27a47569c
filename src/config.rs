use std::env;

use eyre::{Result, WrapErr};
use log::debug;

pub const PROJECT_NAME: &str = "YouTube Tools API";

/// Server settings, read from environment variables with defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from HOST, PORT, and LOG_LEVEL environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Settings::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .wrap_err_with(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => defaults.port,
        };
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        debug!("Settings: host={host} port={port} log_level={log_level}");
        Ok(Settings { host, port, log_level })
    }
}
