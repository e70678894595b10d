//! Domain layer: entities, errors, and the store abstraction

pub mod error;
pub mod store;
pub mod user;

pub use error::DomainError;
pub use store::{Record, RecordStore, StoreError};
pub use user::User;
