use serde::{Deserialize, Serialize};

/// Successful answer of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    /// Unix seconds.
    pub expires_at: i64,
}

/// Client-held record of an authenticated user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub expires_at: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, expires_at: i64) -> Self {
        Self { token: token.into(), user_id: user_id.into(), expires_at }
    }

    /// True iff `expires_at` is strictly after `now` (both unix seconds).
    pub fn is_live_at(&self, now: i64) -> bool {
        !self.token.is_empty() && self.expires_at > now
    }
}

impl From<LoginResponse> for Session {
    fn from(r: LoginResponse) -> Self {
        Self { token: r.token, user_id: r.user_id, expires_at: r.expires_at }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
