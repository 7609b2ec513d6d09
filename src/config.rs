//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Snapshot file used when `CONTACT_BOOK_PATH` is not set.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book snapshot is read from and saved to
    pub book_path: PathBuf,

    /// Refuse to start when the snapshot cannot be read (default: false).
    /// When false, an unreadable snapshot is moved aside and the session
    /// starts with an empty book.
    pub strict_load: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Snapshot file path (default: `addressbook.json`)
    /// - `CONTACT_BOOK_STRICT_LOAD`: `true`/`false` (default: `false`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let strict_load = Self::parse_env_bool("CONTACT_BOOK_STRICT_LOAD", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            strict_load,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            strict_load: false,
            log_level: "error".to_string(),
        }
    }
}
