//! File-backed key/value store with atomic writes.
//!
//! All items live in a single JSON object. Every write takes an exclusive
//! lock, rewrites the object to a temp file and renames it into place.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use bakerbot_core::error::{BakerError, Result};
use bakerbot_core::storage::KeyValueStore;

/// Errors that can occur during file store operations.
#[derive(Debug)]
pub enum JsonFileError {
    /// File I/O error.
    Io(std::io::Error),
    /// The store file is not a JSON object of strings.
    Json(serde_json::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for JsonFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonFileError::Io(e) => write!(f, "I/O error: {}", e),
            JsonFileError::Json(e) => write!(f, "JSON error: {}", e),
            JsonFileError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for JsonFileError {}

impl From<std::io::Error> for JsonFileError {
    fn from(e: std::io::Error) -> Self {
        JsonFileError::Io(e)
    }
}

impl From<serde_json::Error> for JsonFileError {
    fn from(e: serde_json::Error) -> Self {
        JsonFileError::Json(e)
    }
}

impl From<JsonFileError> for BakerError {
    fn from(e: JsonFileError) -> Self {
        match e {
            JsonFileError::Io(io) => io.into(),
            JsonFileError::Json(json) => json.into(),
            JsonFileError::Lock(message) => BakerError::storage(message),
        }
    }
}

type Items = BTreeMap<String, String>;

/// A local-storage lookalike persisted to one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole object. Missing or empty file is an empty store.
    fn load(&self) -> std::result::Result<Items, JsonFileError> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the whole object via temp file + rename.
    fn save(&self, items: &Items) -> std::result::Result<(), JsonFileError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write. An unparseable file is replaced.
    fn update<F>(&self, f: F) -> std::result::Result<(), JsonFileError>
    where
        F: FnOnce(&mut Items),
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut items = match self.load() {
            Ok(items) => items,
            Err(JsonFileError::Json(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is not valid JSON, overwriting"
                );
                Items::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut items);
        self.save(&items)
    }

    fn temp_path(&self) -> std::result::Result<PathBuf, JsonFileError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            JsonFileError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|items| {
            items.remove(key);
        })?;
        Ok(())
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> std::result::Result<Self, JsonFileError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| JsonFileError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; removing the file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}
