// src/core/config.rs
use std::env;
use log::LevelFilter;

// Runtime configuration for the password meter
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Session
    pub history_size: usize,
    pub show_password: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 12,
            history_size: 5,
            show_password: false,
        }
    }
}

// Used as a clap value parser for `--log-level`
pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(format!("unknown log level '{}'", level)),
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSMETER_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => log::warn!("Ignoring invalid PASSMETER_PASSWORD_LENGTH '{}'", val),
            }
        }

        // Session
        if let Some(val) = lookup("PASSMETER_HISTORY_SIZE") {
            match val.parse::<usize>() {
                Ok(size) if size > 0 => config.history_size = size,
                _ => log::warn!("Ignoring invalid PASSMETER_HISTORY_SIZE '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSMETER_SHOW_PASSWORD") {
            match val.parse() {
                Ok(show) => config.show_password = show,
                Err(_) => log::warn!("Ignoring invalid PASSMETER_SHOW_PASSWORD '{}'", val),
            }
        }

        config
    }
}
