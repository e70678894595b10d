use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the application router
///
/// `/users` dispatches on the HTTP method over a closed set of handlers; any
/// other method lands in the 405 fallback with a fixed plain-text message.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route(
            "/users",
            get(users::get_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user)
                .fallback(users::method_not_allowed),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
