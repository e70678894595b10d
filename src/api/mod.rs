//! HTTP API layer

pub mod health;
pub mod response;
pub mod router;
pub mod state;
pub mod users;

pub use response::{ApiError, ErrorBody};
pub use router::create_router;
pub use state::AppState;
