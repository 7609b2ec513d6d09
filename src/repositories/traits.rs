use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over snapshot storage, enabling different
/// implementations (file-backed, in-memory for tests).
pub trait BookRepository: Send + Sync {
    /// Load the stored address book, or an empty one if nothing was stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
