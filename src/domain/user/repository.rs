//! User repository
//!
//! Orchestrates validation and record-store calls for the five user
//! operations. Each operation is a single-shot sequence of at most three
//! dependent calls (validate, probe, write) with no retries and no rollback;
//! a failure at any step aborts and reports immediately.

use std::sync::Arc;

use tracing::debug;

use crate::domain::store::RecordStore;
use crate::domain::DomainError;

use super::entity::User;
use super::validation::is_email_valid;

/// Stateless orchestrator over an injected record store
///
/// Holds no state across calls; the store is the sole source of truth. The
/// store client is constructed once at startup and shared for the process
/// lifetime.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<dyn RecordStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch a single user by email
    ///
    /// Returns `Ok(None)` when no record matches; absence is not an error.
    pub async fn fetch_user(&self, email: &str) -> Result<Option<User>, DomainError> {
        let record = self
            .store
            .get_item(email)
            .await
            .map_err(|e| DomainError::fetch_failed(e.to_string()))?;

        match record {
            Some(record) => {
                let user = serde_json::from_value(record)
                    .map_err(|e| DomainError::decode_failed(e.to_string()))?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Fetch all users; order is store-defined
    pub async fn fetch_users(&self) -> Result<Vec<User>, DomainError> {
        let records = self
            .store
            .scan()
            .await
            .map_err(|e| DomainError::fetch_failed(e.to_string()))?;

        records
            .into_iter()
            .map(|record| {
                serde_json::from_value(record)
                    .map_err(|e| DomainError::decode_failed(e.to_string()))
            })
            .collect()
    }

    /// Create a user from a raw JSON request body
    ///
    /// Fails with `AlreadyExists` when a record with the same email is
    /// already stored.
    pub async fn create_user(&self, raw_body: &str) -> Result<User, DomainError> {
        let user: User = serde_json::from_str(raw_body)
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;

        if !is_email_valid(&user.email) {
            return Err(DomainError::invalid_email(format!(
                "'{}' is not a valid email address",
                user.email
            )));
        }

        // Existence probe. Probe failures are ignored on purpose: only a
        // record that actually comes back counts as an existing user.
        if let Ok(Some(_)) = self.store.get_item(&user.email).await {
            return Err(DomainError::already_exists(format!(
                "user with email '{}' already exists",
                user.email
            )));
        }

        debug!(email = %user.email, "creating user");
        self.put(&user).await?;
        Ok(user)
    }

    /// Replace an existing user from a raw JSON request body
    ///
    /// Requires the record to exist; fails with `UserNotFound` otherwise.
    /// This is a full replace, not a partial patch.
    pub async fn update_user(&self, raw_body: &str) -> Result<User, DomainError> {
        let user: User = serde_json::from_str(raw_body)
            .map_err(|e| DomainError::invalid_input(e.to_string()))?;

        let existing = self
            .store
            .get_item(&user.email)
            .await
            .map_err(|e| DomainError::fetch_failed(e.to_string()))?;

        if existing.is_none() {
            return Err(DomainError::user_not_found(format!(
                "user with email '{}' does not exist",
                user.email
            )));
        }

        debug!(email = %user.email, "updating user");
        self.put(&user).await?;
        Ok(user)
    }

    /// Delete a user by email
    ///
    /// Idempotent: deleting an absent email succeeds. An empty email is
    /// rejected rather than passed through as a store key.
    pub async fn delete_user(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() {
            return Err(DomainError::invalid_input(
                "missing 'email' query parameter",
            ));
        }

        debug!(email = %email, "deleting user");
        self.store
            .delete_item(email)
            .await
            .map_err(|e| DomainError::delete_failed(e.to_string()))
    }

    async fn put(&self, user: &User) -> Result<(), DomainError> {
        let record = serde_json::to_value(user)
            .map_err(|e| DomainError::encode_failed(e.to_string()))?;

        self.store
            .put_item(&user.email, record)
            .await
            .map_err(|e| DomainError::write_failed(e.to_string()))
    }
}
