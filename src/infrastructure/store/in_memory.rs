//! In-memory record store implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::store::{Record, RecordStore, StoreError};

/// Thread-safe in-memory record store
///
/// Useful for testing and local development. Data is lost when the process
/// terminates.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, Record>>,
}

impl InMemoryRecordStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records
    pub fn with_records(records: impl IntoIterator<Item = (String, Record)>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_item(&self, key: &str) -> Result<Option<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::unavailable(format!("failed to acquire read lock: {}", e)))?;

        Ok(records.get(key).cloned())
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::unavailable(format!("failed to acquire read lock: {}", e)))?;

        Ok(records.values().cloned().collect())
    }

    async fn put_item(&self, key: &str, record: Record) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::unavailable(format!("failed to acquire write lock: {}", e)))?;

        records.insert(key.to_string(), record);
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::unavailable(format!("failed to acquire write lock: {}", e)))?;

        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryRecordStore::new();

        store
            .put_item("a@b.com", json!({"email": "a@b.com", "firstName": "A"}))
            .await
            .unwrap();

        let record = store.get_item("a@b.com").await.unwrap().unwrap();
        assert_eq!(record["firstName"], "A");
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = InMemoryRecordStore::new();
        assert!(store.get_item("x@y.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_is_upsert() {
        let store = InMemoryRecordStore::new();

        store
            .put_item("a@b.com", json!({"email": "a@b.com", "firstName": "A"}))
            .await
            .unwrap();
        store
            .put_item("a@b.com", json!({"email": "a@b.com", "firstName": "Anna"}))
            .await
            .unwrap();

        let record = store.get_item("a@b.com").await.unwrap().unwrap();
        assert_eq!(record["firstName"], "Anna");
        assert_eq!(store.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_scan_returns_all_records() {
        let store = InMemoryRecordStore::with_records([
            ("a@b.com".to_string(), json!({"email": "a@b.com"})),
            ("c@d.com".to_string(), json!({"email": "c@d.com"})),
        ]);

        assert_eq!(store.scan().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryRecordStore::new();

        store
            .put_item("a@b.com", json!({"email": "a@b.com"}))
            .await
            .unwrap();

        assert!(store.delete_item("a@b.com").await.is_ok());
        assert!(store.delete_item("a@b.com").await.is_ok());
        assert!(store.get_item("a@b.com").await.unwrap().is_none());
    }
}
