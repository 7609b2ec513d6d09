use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::snapshot;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Upper bound on numbered `.corrupt.N` files tried by quarantine.
const MAX_QUARANTINED: u32 = 1000;

/// Book repository backed by a snapshot file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    /// Create a repository reading and writing the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the book, or recover from an unreadable snapshot.
    ///
    /// With `strict` set, any load error is returned. Otherwise the unreadable
    /// file is moved aside with [`quarantine`](Self::quarantine) and an empty
    /// book is returned.
    pub fn load_or_recover(&self, strict: bool) -> StorageResult<AddressBook> {
        match self.load() {
            Ok(book) => Ok(book),
            Err(e) if strict => Err(e),
            Err(e) => {
                warn!(error = %e, "Address book unreadable, starting with an empty one");
                self.quarantine()?;
                Ok(AddressBook::new())
            }
        }
    }

    /// Move an unreadable snapshot out of the way as `<path>.corrupt`.
    ///
    /// The next save would otherwise overwrite it. Earlier quarantined files
    /// are kept: when `<path>.corrupt` is taken, `<path>.corrupt.1`,
    /// `<path>.corrupt.2` and so on are tried. Returns the new location.
    pub fn quarantine(&self) -> StorageResult<PathBuf> {
        let target = self.free_corrupt_path()?;

        fs::rename(&self.path, &target)?;
        warn!(
            from = %self.path.display(),
            to = %target.display(),
            "Moved unreadable snapshot aside"
        );
        Ok(target)
    }

    fn free_corrupt_path(&self) -> StorageResult<PathBuf> {
        let mut base = self.path.clone().into_os_string();
        base.push(".corrupt");

        let first = PathBuf::from(&base);
        if !first.try_exists()? {
            return Ok(first);
        }
        for n in 1..=MAX_QUARANTINED {
            let mut candidate = base.clone();
            candidate.push(format!(".{}", n));
            let candidate = PathBuf::from(candidate);
            if !candidate.try_exists()? {
                return Ok(candidate);
            }
        }
        Err(StorageError::Corrupt(format!(
            "too many quarantined snapshots next to {}",
            self.path.display()
        )))
    }
}

impl BookRepository for FileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        snapshot::load(&self.path)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        snapshot::save(book, &self.path)
    }
}
