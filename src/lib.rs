//! Contact Book - a command-line assistant that keeps contacts, phone numbers
//! and birthdays, and reminds you whom to congratulate this week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the address book
//! - **error**: Custom error types for precise error handling
//! - **clock**: Source of the current date for birthday rules
//! - **repositories**: Versioned JSON snapshot persistence
//! - **commands**: Input tokenizing, command handlers and reply rendering
//! - **config**: Configuration management from environment variables

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandResult, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, FileBookRepository};
