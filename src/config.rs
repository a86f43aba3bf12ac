//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Only the interactive layer reads configuration; the address book
//! itself never touches the environment.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_WINDOW_DAYS;
use std::env;

/// Largest accepted birthday look-ahead.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Look-ahead used by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Fallback log filter when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday look-ahead in days (default: 7, max: 366)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
