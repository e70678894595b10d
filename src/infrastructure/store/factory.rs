//! Record store backend selection

use std::sync::Arc;

use tracing::info;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::store::RecordStore;

use super::dynamodb::DynamoDbRecordStore;
use super::in_memory::InMemoryRecordStore;

/// Builds the record store selected by configuration
pub struct StoreFactory;

impl StoreFactory {
    pub async fn from_config(config: &StoreConfig) -> Arc<dyn RecordStore> {
        match config.backend {
            StoreBackend::Memory => {
                info!("Using in-memory record store");
                Arc::new(InMemoryRecordStore::new())
            }
            StoreBackend::Dynamodb => {
                info!(table = %config.table_name, "Using DynamoDB record store");
                Arc::new(
                    DynamoDbRecordStore::from_env(
                        config.region.clone(),
                        config.table_name.clone(),
                    )
                    .await,
                )
            }
        }
    }
}
