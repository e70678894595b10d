//! HTTP error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON body carried by every failed operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_msg: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error_msg: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        // Every domain failure maps to 400: the service does not distinguish
        // client errors from store errors on the wire.
        Self::bad_request(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.error_msg)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serialization() {
        let err = ApiError::bad_request("user with email 'a@b.com' already exists");
        let json = serde_json::to_string(&err.body).unwrap();

        assert_eq!(
            json,
            r#"{"error_msg":"user with email 'a@b.com' already exists"}"#
        );
    }

    #[test]
    fn test_domain_error_conversion_is_always_400() {
        for err in [
            DomainError::invalid_input("bad"),
            DomainError::invalid_email("bad"),
            DomainError::already_exists("exists"),
            DomainError::user_not_found("missing"),
            DomainError::fetch_failed("down"),
            DomainError::write_failed("down"),
            DomainError::delete_failed("down"),
            DomainError::decode_failed("shape"),
            DomainError::encode_failed("shape"),
        ] {
            let api_err: ApiError = err.into();
            assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_conversion_keeps_message() {
        let api_err: ApiError = DomainError::fetch_failed("store unavailable").into();
        assert_eq!(
            api_err.body.error_msg,
            "Failed to fetch record: store unavailable"
        );
    }
}
