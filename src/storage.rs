use crate::errors::StorageError;
use crate::keys::StorageKey;
use std::collections::BTreeMap;
use std::io::Write;
use std::{env, path::Path, path::PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::{debug, error};

/// Persistent string key-value storage.
///
/// Reads cannot fail: an absent entry is `None` and callers decide the
/// default. Writes replace the whole value stored under the key.
pub trait KeyValueStore {
    fn get(&self, key: &StorageKey) -> Option<String>;

    fn set(&mut self, key: &StorageKey, value: String) -> Result<(), StorageError>;
}

/// Volatile store, used by tests and as the fallback when nothing is on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Seeds a raw entry, bypassing the typed keys.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StorageKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: &StorageKey, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.as_str().to_owned(), value);
        Ok(())
    }
}

/// Store mirrored to a JSON object on disk.
///
/// Every `set` rewrites the file through a temp file in the same
/// directory. When the write fails the in-memory value is kept, so the
/// session continues and the next successful write catches the file up.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn new(path: PathBuf, entries: BTreeMap<String, String>) -> Self {
        Self { path, entries }
    }

    fn flush(&self) -> std::io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let payload = serde_json::to_vec_pretty(&self.entries).map_err(std::io::Error::other)?;
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(&payload)?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StorageKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: &StorageKey, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.as_str().to_owned(), value);
        self.flush().map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        debug!(key = %key, path = %self.path.display(), "persisted entry");
        Ok(())
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/state.json")
}

/// Reads the persisted entries, treating a missing or unreadable file as
/// an empty store.
pub async fn load_entries(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    }
}

pub async fn open_file_store(path: PathBuf) -> FileStore {
    let entries = load_entries(&path).await;
    FileStore::new(path, entries)
}
