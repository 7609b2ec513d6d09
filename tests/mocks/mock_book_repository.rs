use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::{snapshot, BookRepository};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory book repository for testing.
///
/// Keeps the encoded snapshot text, so every save and load goes through the
/// same serialization as the file-backed repository.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Pretend the backing store already holds `text`.
    pub fn set_stored(&self, text: &str) {
        *self.stored.lock().unwrap() = Some(text.to_string());
    }

    pub fn stored(&self) -> Option<String> {
        self.stored.lock().unwrap().clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        match self.stored.lock().unwrap().as_deref() {
            Some(text) => snapshot::decode(text),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        let text = snapshot::encode(book)?;
        *self.stored.lock().unwrap() = Some(text);
        Ok(())
    }
}
