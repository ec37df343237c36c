//! Key/blob persistence.
//!
//! [`BlobStore`] is the only thing the rest of the app knows about storage.
//! [`FileStore`] keeps one `<key>.json` file per key; [`MemoryStore`] keeps
//! everything in a map for tests and for sessions whose directory is
//! unusable.

use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

/// A minimal key/value store for opaque blobs.
pub trait BlobStore: Send + Sync {
    /// Stores `blob` under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError>;

    /// Returns the blob under `key`, or `None` if there is none.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir`, creating it on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::new(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileStore {
    #[instrument(skip(self, blob), fields(dir = %self.dir.display(), bytes = blob.len()))]
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        let path = self.path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::new(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        // Write then rename so a crash never leaves a half-written file.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, blob)
            .map_err(|e| StorageError::new(format!("Failed to write {}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| StorageError::new(format!("Failed to replace {}: {}", path.display(), e)))?;

        debug!("Blob saved");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.blobs
            .lock()
            .map_err(|_| StorageError::new("Memory store lock poisoned".to_string()))
    }
}

impl BlobStore for MemoryStore {
    fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        self.blobs()?.insert(key.to_string(), blob.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.blobs()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.blobs()?.remove(key);
        Ok(())
    }
}

/// Storage error.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
