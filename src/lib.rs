//! User Gateway API
//!
//! A minimal HTTP CRUD service for user records keyed by email address,
//! backed by a key-value record store with DynamoDB and in-memory backends.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::user::UserRepository;
use infrastructure::store::StoreFactory;

/// Create the application state with the configured store backend
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Store backend: {:?}", config.store.backend);

    let store = StoreFactory::from_config(&config.store).await;
    let users = Arc::new(UserRepository::new(store));

    Ok(AppState::new(users))
}
