//! Client-side logic of the admin portal.
//! - `validation`: pure form checks (login, employee creation).
//! - `session`: persisted session with an injected store and clock.
//! - `api`: typed calls to the backend REST API.
//! - `auth` / `employees`: the screen flows tying the above together.

pub mod errors;
pub mod validation;
pub mod storage;
pub mod session;
pub mod api;
pub mod auth;
pub mod employees;

pub use errors::ServiceError;
