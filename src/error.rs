//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book operations and command handlers.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, date or name failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// The birthday is not strictly in the past
    #[error("Birthday cannot be in the future!")]
    FutureDate(String),

    /// No contact is filed under the given name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("This number: {0} does not exist")]
    PhoneNotFound(String),

    /// The command was given too few arguments
    #[error("{0}")]
    MissingArguments(&'static str),
}

/// Errors that can occur while reading or writing the snapshot file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid snapshot document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version
    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The snapshot parsed but breaks an address book invariant
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type CommandResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
