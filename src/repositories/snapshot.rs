//! Versioned JSON snapshot of the address book.
//!
//! The on-disk document looks like:
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "12.06.1990" },
//!     { "name": "Jane", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! Contacts are written in address book order. Every field is re-validated
//! when the document is read back.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Schema version written to every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Serialize `book` to the snapshot document.
pub fn encode(book: &AddressBook) -> StorageResult<String> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        contacts: book.records().collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse a snapshot document back into an address book.
///
/// # Errors
///
/// - `StorageError::Json` if the text is not a snapshot or a field is invalid
/// - `StorageError::UnsupportedVersion` for any version other than [`SNAPSHOT_VERSION`]
/// - `StorageError::Corrupt` if two contacts share a name
pub fn decode(text: &str) -> StorageResult<AddressBook> {
    // Read the version alone first so a newer layout reports the version,
    // not whatever field it happens to trip over.
    let header: SnapshotHeader = serde_json::from_str(text)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: header.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let snapshot: SnapshotIn = serde_json::from_str(text)?;
    let mut book = AddressBook::new();
    for record in snapshot.contacts {
        if book.find(record.name()).is_some() {
            return Err(StorageError::Corrupt(format!(
                "duplicate contact name: {}",
                record.name()
            )));
        }
        book.add_record(record);
    }
    Ok(book)
}

/// Write `book` to `path`, replacing any existing file.
///
/// The snapshot is written to a temporary file next to `path` and renamed
/// over it, so a failed save never leaves a half-written snapshot behind.
/// An existing snapshot's permissions carry over to the new file.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let json = encode(book)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), contacts = book.len(), "Saved address book");
    Ok(())
}

/// Read the address book stored at `path`.
///
/// A missing file is not an error: it yields an empty address book.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No snapshot found, starting empty");
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(e.into()),
    };

    let book = decode(&text)?;
    info!(path = %path.display(), contacts = book.len(), "Loaded address book");
    Ok(book)
}
