//! JSON-file backed string key-value store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

type Entries = BTreeMap<String, String>;

/// String key-value store persisted as one JSON object on disk.
///
/// Every operation reads the file; writes replace it through a temp file and
/// rename. A missing or unparseable file reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value stored under `key`, if any.
    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await
    }

    /// Read, transform and write back the value under `key` while holding the
    /// write lock, so concurrent updates never overwrite each other.
    ///
    /// `f` receives the current value and returns the new value plus a result
    /// handed back to the caller.
    pub async fn update_item<F, R>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(Option<String>) -> Result<(String, R), StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        let (value, out) = f(entries.remove(key))?;
        entries.insert(key.to_string(), value);
        self.write_entries(&entries).await?;
        Ok(out)
    }

    /// Delete `key`. Returns whether it was present.
    pub async fn remove_item(&self, key: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.write_entries(&entries).await?;
        Ok(true)
    }

    /// All keys currently stored, sorted.
    pub async fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_entries().await?.into_keys().collect())
    }

    async fn read_entries(&self) -> Result<Entries, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is not a JSON object of strings; treating as empty"
                );
                Ok(Entries::new())
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Store written");
        Ok(())
    }
}
