//! Backend REST API.
//!
//! `PortalApi` is the seam between the flows and the transport so the flows
//! can be exercised against [`mock::MockPortalApi`].

pub mod http;
pub mod mock;

use async_trait::async_trait;
use models::{ApiError, CreateEmployeeRequest, Credentials, Employee, LoginResponse};

pub use http::HttpApiClient;

pub const LOGIN_PATH: &str = "/auth/login";
pub const EMPLOYEES_PATH: &str = "/employees";

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /employees`, in backend order.
    async fn list_employees(&self, token: Option<&str>) -> Result<Vec<Employee>, ApiError>;

    /// `POST /employees`.
    async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
        token: Option<&str>,
    ) -> Result<Employee, ApiError>;
}
