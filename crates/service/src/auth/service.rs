use std::sync::Arc;

use models::{Credentials, Session};
use tracing::{info, instrument, warn};

use crate::api::PortalApi;
use crate::errors::ServiceError;
use crate::session::SessionStore;
use crate::validation::validate_login;

/// Shown when the backend answers 401 to a login attempt.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Shown when a failed login carries no message of its own.
pub const LOGIN_FAILED: &str = "Failed to sign in";

/// Authentication flow independent of any front-end.
pub struct AuthService<A: PortalApi> {
    api: Arc<A>,
    session: Arc<SessionStore>,
}

impl<A: PortalApi> AuthService<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self { Self { api, session } }

    /// Validate, authenticate and persist the session.
    ///
    /// Field errors are returned without contacting the backend.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::{Credentials, LoginResponse};
    /// use service::api::mock::MockPortalApi;
    /// use service::auth::AuthService;
    /// use service::session::{FixedClock, SessionStore};
    /// use service::storage::MemoryStore;
    ///
    /// let api = Arc::new(MockPortalApi::new().with_user(
    ///     "admin@acme.io",
    ///     "Passw0rd!",
    ///     LoginResponse { token: "t".into(), user_id: "u1".into(), expires_at: 2_000 },
    /// ));
    /// let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new()), Arc::new(FixedClock::new(1_000))));
    /// let auth = AuthService::new(api, session);
    /// let s = tokio_test::block_on(auth.login(&Credentials::new("admin@acme.io", "Passw0rd!"))).unwrap();
    /// assert_eq!(s.user_id, "u1");
    /// assert!(auth.is_authenticated());
    /// ```
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ServiceError> {
        validate_login(credentials).into_result()?;

        let response = self.api.login(credentials).await.map_err(|e| {
            warn!(status = e.status, "login_rejected");
            if e.is_unauthorized() {
                ServiceError::Api { status: e.status, message: INVALID_CREDENTIALS.to_string() }
            } else {
                ServiceError::api(e, LOGIN_FAILED)
            }
        })?;

        let session = Session::from(response);
        self.session.save(&session)?;
        info!(user_id = %session.user_id, "login_succeeded");
        Ok(session)
    }

    /// Forget the stored session. Safe to call when signed out.
    pub fn logout(&self) -> Result<(), ServiceError> {
        self.session.clear()
    }

    pub fn is_authenticated(&self) -> bool { self.session.is_valid() }

    /// Stored session, only while it is valid.
    pub fn current_session(&self) -> Option<Session> { self.session.current() }
}
