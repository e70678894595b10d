//! DynamoDB record store implementation

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};

use crate::domain::store::{Record, RecordStore, StoreError};

/// Partition key attribute of the backing table
const KEY_ATTRIBUTE: &str = "email";

/// Record store backed by a DynamoDB table
///
/// The table's partition key is the string attribute `email`; no secondary
/// indexes are used. The client is cheap to clone and safe to share across
/// request handlers.
#[derive(Debug, Clone)]
pub struct DynamoDbRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoDbRecordStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds a store from the default AWS credential/region chain, with an
    /// optional explicit region override.
    pub async fn from_env(region: Option<String>, table_name: impl Into<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn get_item(&self, key: &str) -> Result<Option<Record>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        match output.item {
            Some(item) => {
                let record =
                    from_item(item).map_err(|e| StoreError::unavailable(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn scan(&self) -> Result<Vec<Record>, StoreError> {
        // Single-page scan; the result set is assumed to fit in one response.
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        from_items(output.items.unwrap_or_default())
            .map_err(|e| StoreError::unavailable(e.to_string()))
    }

    async fn put_item(&self, key: &str, record: Record) -> Result<(), StoreError> {
        let mut item: std::collections::HashMap<String, AttributeValue> =
            to_item(&record).map_err(|e| StoreError::unavailable(e.to_string()))?;

        // The key attribute must always be present on the item itself.
        item.insert(KEY_ATTRIBUTE.to_string(), AttributeValue::S(key.to_string()));

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(e.to_string()))?;

        Ok(())
    }
}
