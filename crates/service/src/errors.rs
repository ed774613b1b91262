use models::ApiError;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// Backend rejected the call or was unreachable; `message` is user-facing.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("session missing or expired; log in again")]
    SessionExpired,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Surface the backend message, or `fallback` when it carried none.
    pub fn api(err: ApiError, fallback: &str) -> Self {
        let message = if err.message.trim().is_empty() { fallback.to_string() } else { err.message };
        Self::Api { status: err.status, message }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self { Self::Storage(err.to_string()) }

    /// Field errors when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(v: ValidationErrors) -> Self { Self::Validation(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_keeps_backend_message() {
        let e = ServiceError::api(ApiError::from_response(409, "email already registered"), "Failed");
        assert_eq!(e.to_string(), "email already registered");
        assert!(matches!(e, ServiceError::Api { status: 409, .. }));
    }

    #[test]
    fn api_blank_message_uses_fallback() {
        let e = ServiceError::api(ApiError { message: String::new(), status: 0 }, "Failed to sign in");
        assert_eq!(e.to_string(), "Failed to sign in");
    }
}
