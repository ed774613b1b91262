//! Employee listing and creation for the signed-in administrator.

pub mod service;

pub use service::{EmployeeService, CREATE_FAILED, LIST_FAILED};
