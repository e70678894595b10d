use thiserror::Error;

/// Core domain errors
///
/// One variant per failure kind so callers can branch on the kind instead of
/// matching message text. Every variant carries a human-readable message that
/// ends up in the HTTP error envelope verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid user data: {message}")]
    InvalidInput { message: String },

    #[error("Invalid email: {message}")]
    InvalidEmail { message: String },

    #[error("{message}")]
    AlreadyExists { message: String },

    #[error("{message}")]
    UserNotFound { message: String },

    #[error("Failed to fetch record: {message}")]
    FetchFailed { message: String },

    #[error("Failed to write record: {message}")]
    WriteFailed { message: String },

    #[error("Failed to delete record: {message}")]
    DeleteFailed { message: String },

    #[error("Failed to decode record: {message}")]
    DecodeFailed { message: String },

    #[error("Failed to encode record: {message}")]
    EncodeFailed { message: String },
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_email(message: impl Into<String>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::UserNotFound {
            message: message.into(),
        }
    }

    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }

    pub fn delete_failed(message: impl Into<String>) -> Self {
        Self::DeleteFailed {
            message: message.into(),
        }
    }

    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::DecodeFailed {
            message: message.into(),
        }
    }

    pub fn encode_failed(message: impl Into<String>) -> Self {
        Self::EncodeFailed {
            message: message.into(),
        }
    }
}
