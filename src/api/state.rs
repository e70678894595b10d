//! Application state shared across request handlers

use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Shared state: the user repository over the process-wide store client
///
/// Constructed once at startup; handlers receive clones of the `Arc`, never
/// mutable global state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }
}
