//! Domain value objects.
//!
//! Every field stored on a contact is wrapped in a small validated type so
//! that a malformed phone number or date can never reach the address book.
//! Construction returns a `Result`; a value that exists is a valid value.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
