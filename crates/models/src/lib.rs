//! Wire and domain types shared by the portal crates.
//!
//! Field names match the backend JSON exactly (snake_case).

pub mod errors;
pub mod credentials;
pub mod session;
pub mod employee;
pub mod api_error;

pub use api_error::ApiError;
pub use credentials::Credentials;
pub use employee::{CreateEmployeeRequest, Employee};
pub use session::{LoginResponse, Session};
