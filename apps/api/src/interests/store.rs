//! Interests store — local key-value persistence for submitted preferences.
//!
//! `AppState` holds an `Arc<dyn InterestsStore>`. `MemoryInterestsStore` is the
//! default; `JsonFileInterestsStore` keeps the same map in one JSON document.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::models::interests::{StoredInterests, UserInterests};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("interests store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("interests store is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

type InterestsMap = BTreeMap<Uuid, StoredInterests>;

#[async_trait]
pub trait InterestsStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredInterests>, StoreError>;

    /// Replaces any previous record for the user.
    async fn put(
        &self,
        user_id: Uuid,
        interests: UserInterests,
    ) -> Result<StoredInterests, StoreError>;

    /// Returns whether a record existed.
    async fn remove(&self, user_id: Uuid) -> Result<bool, StoreError>;
}

fn stamp(user_id: Uuid, interests: UserInterests) -> StoredInterests {
    StoredInterests {
        user_id,
        interests,
        saved_at: Utc::now(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryInterestsStore {
    records: RwLock<InterestsMap>,
}

#[async_trait]
impl InterestsStore for MemoryInterestsStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredInterests>, StoreError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn put(
        &self,
        user_id: Uuid,
        interests: UserInterests,
    ) -> Result<StoredInterests, StoreError> {
        let record = stamp(user_id, interests);
        self.records.write().await.insert(user_id, record.clone());
        Ok(record)
    }

    async fn remove(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.write().await.remove(&user_id).is_some())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON file
// ────────────────────────────────────────────────────────────────────────────

pub struct JsonFileInterestsStore {
    path: PathBuf,
    records: Mutex<InterestsMap>,
}

impl JsonFileInterestsStore {
    /// Opens the store, starting empty if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => InterestsMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => InterestsMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Interests store opened at {} ({} records)",
            path.display(),
            records.len()
        );
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Writes to a sibling temp file and renames it over the store file.
    async fn persist(&self, records: &InterestsMap) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl InterestsStore for JsonFileInterestsStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<StoredInterests>, StoreError> {
        Ok(self.records.lock().await.get(&user_id).cloned())
    }

    async fn put(
        &self,
        user_id: Uuid,
        interests: UserInterests,
    ) -> Result<StoredInterests, StoreError> {
        let mut records = self.records.lock().await;
        let record = stamp(user_id, interests);
        let previous = records.insert(user_id, record.clone());

        if let Err(e) = self.persist(&records).await {
            // keep memory consistent with disk
            match previous {
                Some(prev) => records.insert(user_id, prev),
                None => records.remove(&user_id),
            };
            return Err(e);
        }
        Ok(record)
    }

    async fn remove(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.lock().await;
        let Some(previous) = records.remove(&user_id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&records).await {
            records.insert(user_id, previous);
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interests::WorkplacePreference;

    fn sample(position: &str) -> UserInterests {
        UserInterests {
            domain: "Data Science".to_string(),
            skills: "Python, SQL".to_string(),
            workplace_preference: WorkplacePreference::Onsite,
            salary_expectation: 100000.0,
            desired_position: position.to_string(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_put_get_remove() {
        let store = MemoryInterestsStore::default();
        let user = Uuid::new_v4();

        assert!(store.get(user).await.unwrap().is_none());

        let saved = store.put(user, sample("Data Analyst")).await.unwrap();
        assert_eq!(saved.user_id, user);

        let fetched = store.get(user).await.unwrap().unwrap();
        assert_eq!(fetched.interests.desired_position, "Data Analyst");

        assert!(store.remove(user).await.unwrap());
        assert!(!store.remove(user).await.unwrap());
        assert!(store.get(user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_put_replaces_previous_record() {
        let store = MemoryInterestsStore::default();
        let user = Uuid::new_v4();
        store.put(user, sample("Data Analyst")).await.unwrap();
        store.put(user, sample("Data Scientist")).await.unwrap();

        let fetched = store.get(user).await.unwrap().unwrap();
        assert_eq!(fetched.interests.desired_position, "Data Scientist");
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interests.json");
        let user = Uuid::new_v4();

        {
            let store = JsonFileInterestsStore::open(&path).await.unwrap();
            store.put(user, sample("Data Scientist")).await.unwrap();
        }

        let reopened = JsonFileInterestsStore::open(&path).await.unwrap();
        let fetched = reopened.get(user).await.unwrap().unwrap();
        assert_eq!(fetched.interests, sample("Data Scientist"));
    }

    #[tokio::test]
    async fn test_file_store_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interests.json");
        let user = Uuid::new_v4();

        let store = JsonFileInterestsStore::open(&path).await.unwrap();
        store.put(user, sample("Data Scientist")).await.unwrap();
        assert!(store.remove(user).await.unwrap());
        drop(store);

        let reopened = JsonFileInterestsStore::open(&path).await.unwrap();
        assert!(reopened.get(user).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileInterestsStore::open(dir.path().join("fresh.json"))
            .await
            .unwrap();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, "[1, 2").await.unwrap();
        assert!(matches!(
            JsonFileInterestsStore::open(&path).await,
            Err(StoreError::Serialization(_))
        ));
    }
}
