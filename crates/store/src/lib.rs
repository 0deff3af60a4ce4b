//! Local key-value persistence for cachewise.
//!
//! A single JSON file maps string keys to string values, the server-side
//! stand-in for browser local storage. Repositories layer typed access on
//! top of it.

pub mod kv;
pub mod repositories;

pub use kv::{JsonFileStore, StoreError};

/// Open (but do not create) the store file at `path`.
///
/// The file is created lazily on first write.
pub fn open_store(path: impl Into<std::path::PathBuf>) -> JsonFileStore {
    JsonFileStore::new(path)
}

/// Verify the store file is readable (a missing file counts as healthy).
pub async fn health_check(store: &JsonFileStore) -> Result<(), StoreError> {
    store.keys().await.map(|_| ())
}
