//! Data models for the contact book.
//!
//! A [`Record`] holds one contact; the [`AddressBook`] owns every record.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
