use std::sync::Arc;

use models::Session;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use crate::errors::ServiceError;
use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_ID_KEY: &str = "user_id";
pub const EXPIRES_AT_KEY: &str = "expires_at";

/// Persisted session of the signed-in administrator.
///
/// All three entries are written and removed together. A session is valid
/// iff a non-empty token and a parseable `expires_at` are stored and the
/// expiry is strictly after the clock's current time.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn with_system_clock(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Store the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), ServiceError> {
        self.store.set_many(&[
            (TOKEN_KEY, session.token.clone()),
            (USER_ID_KEY, session.user_id.clone()),
            (EXPIRES_AT_KEY, session.expires_at.to_string()),
        ])?;
        info!(user_id = %session.user_id, expires_at = session.expires_at, "session_saved");
        Ok(())
    }

    pub fn load_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY)
    }

    /// Full stored session; `None` if the token or expiry is missing or the expiry is
    /// malformed. A missing user id reads as empty. Expired sessions are returned as stored.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let user_id = self.store.get(USER_ID_KEY).unwrap_or_default();
        let expires_at = parse_expiry(&self.store.get(EXPIRES_AT_KEY)?)?;
        Some(Session { token, user_id, expires_at })
    }

    /// Remove all session entries. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<(), ServiceError> {
        self.store.remove_many(&[TOKEN_KEY, USER_ID_KEY, EXPIRES_AT_KEY])?;
        info!("session_cleared");
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        if !self.store.get(TOKEN_KEY).is_some_and(|t| !t.is_empty()) {
            return false;
        }
        let Some(raw) = self.store.get(EXPIRES_AT_KEY).filter(|v| !v.is_empty()) else {
            return false;
        };
        match parse_expiry(&raw) {
            Some(expires_at) => expires_at > self.clock.now_unix(),
            None => {
                debug!(expires_at = %raw, "stored expiry is not an integer; treating session as invalid");
                false
            }
        }
    }

    /// The stored session when it is currently valid.
    pub fn current(&self) -> Option<Session> {
        let now = self.clock.now_unix();
        self.load().filter(|s| s.is_live_at(now))
    }
}

// Whole-value parse: a numeric prefix followed by garbage ("1767229200abc") is
// malformed, not truncated to its leading digits.
fn parse_expiry(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
