//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; stdout is left untouched because it carries
//! command output.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Configuration for the contact book shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Pinned date for the upcoming birthday query; the system clock is used when unset
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `CONTACT_BOOK_TODAY`: Date in `DD.MM.YYYY` form to use as today
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;

        Ok(Config {
            log_level,
            prompt,
            today,
        })
    }

    /// Parse an optional environment variable as a `DD.MM.YYYY` date.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::new(val.as_str())
                .map(|b| Some(b.date()))
                .map_err(|e| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("{}, got: {}", e, val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: "Enter a command: ".to_string(),
            today: None,
        }
    }
}
