//! Repository for the dashboard probe history (`cacheHits` key).

use cachewise_core::metrics::dashboard::{CacheHit, HitHistory};

use crate::kv::{JsonFileStore, StoreError};

/// Store key holding the JSON-encoded probe history.
pub const CACHE_HITS_KEY: &str = "cacheHits";

/// Provides typed access to the stored probe history.
pub struct CacheHitRepo;

impl CacheHitRepo {
    /// Load the history, newest first.
    ///
    /// A missing key or a value that is not a valid history yields an empty
    /// history rather than an error.
    pub async fn load(store: &JsonFileStore) -> Result<HitHistory, StoreError> {
        let raw = store.get_item(CACHE_HITS_KEY).await?;
        Ok(decode(raw.as_deref()))
    }

    /// Prepend `hit` to the stored history and return the updated history.
    ///
    /// The read and write happen under the store's write lock, so concurrent
    /// appends all land.
    pub async fn append(store: &JsonFileStore, hit: CacheHit) -> Result<HitHistory, StoreError> {
        store
            .update_item(CACHE_HITS_KEY, |raw| {
                let mut history = decode(raw.as_deref());
                history.record(hit);
                let encoded = serde_json::to_string(&history.entries())?;
                Ok((encoded, history))
            })
            .await
    }

    /// Remove the stored history.
    pub async fn clear(store: &JsonFileStore) -> Result<(), StoreError> {
        let existed = store.remove_item(CACHE_HITS_KEY).await?;
        tracing::debug!(existed, "Probe history cleared");
        Ok(())
    }
}

fn decode(raw: Option<&str>) -> HitHistory {
    let Some(raw) = raw else {
        return HitHistory::default();
    };
    match serde_json::from_str::<Vec<CacheHit>>(raw) {
        Ok(entries) => HitHistory::from_stored(entries),
        Err(e) => {
            tracing::warn!(error = %e, "Stored probe history is invalid; starting empty");
            HitHistory::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use cachewise_core::metrics::dashboard::{CacheStatus, DASHBOARD_HISTORY_CAPACITY};
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn hit(secs: i64, status: CacheStatus) -> CacheHit {
        CacheHit {
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(secs),
            status,
            load_time: 42.0,
        }
    }

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn load_without_key_is_empty() {
        let (_dir, store) = temp_store();
        assert!(CacheHitRepo::load(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_value_loads_as_empty() {
        let (_dir, store) = temp_store();
        store
            .set_item(CACHE_HITS_KEY, "{\"oops\":true}".to_string())
            .await
            .unwrap();
        assert!(CacheHitRepo::load(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_persists_newest_first_and_caps() {
        let (_dir, store) = temp_store();
        for i in 0..12 {
            CacheHitRepo::append(&store, hit(i, CacheStatus::Hit))
                .await
                .unwrap();
        }

        let loaded = CacheHitRepo::load(&store).await.unwrap();
        let entries = loaded.entries();
        assert_eq!(entries.len(), DASHBOARD_HISTORY_CAPACITY);
        assert_eq!(entries[0], hit(11, CacheStatus::Hit));
        assert_eq!(entries[9], hit(2, CacheStatus::Hit));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_all_kept() {
        let (_dir, store) = temp_store();
        let store = Arc::new(store);

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    CacheHitRepo::append(&store, hit(i, CacheStatus::Hit)).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let loaded = CacheHitRepo::load(&store).await.unwrap();
        assert_eq!(loaded.len(), 8);
    }

    #[tokio::test]
    async fn clear_removes_key() {
        let (_dir, store) = temp_store();
        CacheHitRepo::append(&store, hit(0, CacheStatus::Miss))
            .await
            .unwrap();
        CacheHitRepo::clear(&store).await.unwrap();

        assert_eq!(store.get_item(CACHE_HITS_KEY).await.unwrap(), None);
        assert!(CacheHitRepo::load(&store).await.unwrap().is_empty());
        // Clearing twice is harmless.
        CacheHitRepo::clear(&store).await.unwrap();
    }
}
