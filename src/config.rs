//! Configuration management for the contact schemas.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::clock::Clock;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact schemas.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Clock used for "birthday not in the future" checks (default: local)
    pub clock: Clock,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACTS_CLOCK`: `local` or `utc` (default: "local")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let clock = match env::var("CONTACTS_CLOCK") {
            Ok(val) => Clock::from_setting(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "CONTACTS_CLOCK".to_string(),
                reason: format!("Must be 'local' or 'utc', got: {}", val),
            })?,
            Err(_) => Clock::default(),
        };

        Ok(Config { log_level, clock })
    }

    /// The clock birthday checks should read from.
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            clock: Clock::Local,
        }
    }
}
