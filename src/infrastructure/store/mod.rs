//! Record store backends

pub mod dynamodb;
pub mod factory;
pub mod in_memory;

pub use dynamodb::DynamoDbRecordStore;
pub use factory::StoreFactory;
pub use in_memory::InMemoryRecordStore;
