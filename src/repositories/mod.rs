//! Persistence of the address book.

mod file_repository;
pub mod snapshot;
mod traits;

pub use file_repository::FileBookRepository;
pub use snapshot::{load, save, SNAPSHOT_VERSION};
pub use traits::BookRepository;
