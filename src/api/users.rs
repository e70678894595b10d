//! User CRUD endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::response::ApiError;
use crate::api::state::AppState;
use crate::domain::User;

/// Fixed body of the 405 response
pub const METHOD_NOT_ALLOWED_MSG: &str = "Method not allowed";

/// Query parameters accepted by GET and DELETE
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub email: Option<String>,
}

/// GET /users
///
/// With an `email` query parameter, fetches that user; without one, fetches
/// all users. A miss on the single-user path answers 200 with an empty-field
/// user rather than an error, so callers distinguish "not found" by checking
/// for an empty `email`.
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Response, ApiError> {
    match query.email.as_deref().filter(|email| !email.is_empty()) {
        Some(email) => {
            debug!(email = %email, "fetching user");

            let user = state
                .users
                .fetch_user(email)
                .await
                .map_err(ApiError::from)?
                .unwrap_or_default();

            Ok(Json(user).into_response())
        }
        None => {
            debug!("fetching all users");

            let users = state.users.fetch_users().await.map_err(ApiError::from)?;
            Ok(Json(users).into_response())
        }
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .users
        .create_user(&body)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users
pub async fn update_user(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .update_user(&body)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(user))
}

/// DELETE /users
///
/// Success carries no body.
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<StatusCode, ApiError> {
    let email = query.email.unwrap_or_default();

    state
        .users
        .delete_user(&email)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}

/// Any method other than GET/POST/PUT/DELETE on /users
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MSG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_query_with_email() {
        let query: UserQuery = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(query.email, Some("a@b.com".to_string()));
    }

    #[test]
    fn test_user_query_without_email() {
        let query: UserQuery = serde_json::from_str("{}").unwrap();
        assert!(query.email.is_none());
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let (status, body) = method_not_allowed().await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "Method not allowed");
    }
}
