//! Record store abstraction
//!
//! The store keeps raw JSON records keyed by a string primary key. Converting
//! records into domain entities (and back) is deliberately left to the
//! callers, so a malformed record surfaces as a decode failure in the
//! operation that touched it rather than inside the store.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

/// A raw record as the store sees it: a JSON object, one attribute per field.
pub type Record = serde_json::Value;

/// Errors surfaced by a record store backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Key-value record store consumed by the user repository
///
/// `put_item` has upsert semantics and `delete_item` is idempotent: deleting
/// an absent key is a successful no-op.
#[async_trait]
pub trait RecordStore: Send + Sync + Debug {
    /// Retrieves a record by its primary key
    async fn get_item(&self, key: &str) -> Result<Option<Record>, StoreError>;

    /// Retrieves all records; order is store-defined
    async fn scan(&self) -> Result<Vec<Record>, StoreError>;

    /// Writes a record, replacing any existing record with the same key
    async fn put_item(&self, key: &str, record: Record) -> Result<(), StoreError>;

    /// Deletes a record by its primary key
    async fn delete_item(&self, key: &str) -> Result<(), StoreError>;
}
