use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the backend.
///
/// `status` is the HTTP status code, or `0` when no response was received
/// (connection refused, timeout, undecodable body).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("api error (status {status}): {message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub const FALLBACK_MESSAGE: &'static str = "An error occurred";

    /// Build from a non-success response body; empty bodies get the fallback text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() { Self::FALLBACK_MESSAGE.to_string() } else { body.to_string() };
        Self { message, status }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: 0 }
    }

    pub fn is_unauthorized(&self) -> bool { self.status == 401 }
}
