//! Login / logout flow on top of the API client and the session store.

pub mod service;

pub use service::{AuthService, INVALID_CREDENTIALS, LOGIN_FAILED};
