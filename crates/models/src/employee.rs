use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Employee as returned by the backend. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    /// RFC 3339 timestamp, kept as sent.
    pub created_at: String,
}

impl Employee {
    /// Creation time in the offset the backend sent it with.
    pub fn created_at_time(&self) -> Result<DateTime<FixedOffset>, ModelError> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| ModelError::Parse(format!("created_at {:?}: {e}", self.created_at)))
    }
}

/// Payload of `POST /employees`. Never persisted client-side.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateEmployeeRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for CreateEmployeeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateEmployeeRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
