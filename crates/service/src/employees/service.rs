use std::sync::Arc;

use models::{CreateEmployeeRequest, Employee};
use tracing::{info, instrument, warn};

use crate::api::PortalApi;
use crate::errors::ServiceError;
use crate::session::SessionStore;
use crate::validation::validate_new_employee;

pub const LIST_FAILED: &str = "Failed to load employees";
pub const CREATE_FAILED: &str = "Failed to create employee";

pub struct EmployeeService<A: PortalApi> {
    api: Arc<A>,
    session: Arc<SessionStore>,
}

impl<A: PortalApi> EmployeeService<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self { Self { api, session } }

    fn token(&self) -> Result<String, ServiceError> {
        if !self.session.is_valid() {
            return Err(ServiceError::SessionExpired);
        }
        self.session.load_token().ok_or(ServiceError::SessionExpired)
    }

    /// All employees, in the order the backend returns them.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let token = self.token()?;
        let employees = self.api.list_employees(Some(&token)).await.map_err(|e| {
            warn!(status = e.status, "employee_list_failed");
            ServiceError::api(e, LIST_FAILED)
        })?;
        info!(count = employees.len(), "employees_loaded");
        Ok(employees)
    }

    /// Validate and submit a new employee.
    ///
    /// Field errors are returned without contacting the backend.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee, ServiceError> {
        let token = self.token()?;
        validate_new_employee(request).into_result()?;
        let employee = self.api.create_employee(request, Some(&token)).await.map_err(|e| {
            warn!(status = e.status, "employee_create_failed");
            ServiceError::api(e, CREATE_FAILED)
        })?;
        info!(employee_id = %employee.id, "employee_created");
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockPortalApi;
    use crate::session::FixedClock;
    use crate::storage::MemoryStore;
    use crate::validation::{Field, Rule};
    use models::{ApiError, LoginResponse, Session};

    const NOW: i64 = 1_767_225_600;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: format!("{}@acme.io", name.to_lowercase()),
            created_at: "2026-02-01T09:00:00Z".into(),
        }
    }

    fn setup(signed_in: bool) -> (EmployeeService<MockPortalApi>, Arc<MockPortalApi>, Arc<FixedClock>) {
        let api = Arc::new(
            MockPortalApi::new()
                .with_user("admin@acme.io", "pw", LoginResponse { token: "tok-1".into(), user_id: "u-1".into(), expires_at: NOW + 60 })
                .with_employees(vec![employee("2", "Zoe"), employee("1", "Ana")]),
        );
        let clock = Arc::new(FixedClock::new(NOW));
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new()), clock.clone()));
        if signed_in {
            session.save(&Session::new("tok-1", "u-1", NOW + 60)).unwrap();
        }
        (EmployeeService::new(api.clone(), session), api, clock)
    }

    #[tokio::test]
    async fn list_sends_token_and_keeps_order() -> Result<(), ServiceError> {
        let (svc, api, _) = setup(true);
        let list = svc.list().await?;
        let ids: Vec<_> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(api.seen_tokens(), vec![Some("tok-1".to_string())]);
        Ok(())
    }

    #[tokio::test]
    async fn signed_out_or_expired_is_rejected_locally() {
        let (svc, api, _) = setup(false);
        assert!(matches!(svc.list().await, Err(ServiceError::SessionExpired)));

        let (svc, api2, clock) = setup(true);
        clock.advance(60);
        assert!(matches!(svc.list().await, Err(ServiceError::SessionExpired)));
        assert_eq!(api.calls() + api2.calls(), 0);
    }

    #[tokio::test]
    async fn create_validates_before_submitting() {
        let (svc, api, _) = setup(true);
        let err = svc.create(&CreateEmployeeRequest::new("Ana", "ana@acme.io", "Abc12345")).await.unwrap_err();
        let fields = err.validation_errors().expect("validation error");
        assert_eq!(fields.rule(Field::Password), Some(Rule::Special));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn create_appends_employee() -> Result<(), ServiceError> {
        let (svc, api, _) = setup(true);
        let created = svc.create(&CreateEmployeeRequest::new("Luis", "luis@acme.io", "Abc1234!")).await?;
        assert_eq!(created.email, "luis@acme.io");
        assert_eq!(api.employees().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn backend_errors_surface_message() {
        let (svc, api, _) = setup(true);
        let err = svc.create(&CreateEmployeeRequest::new("Ana", "ana@acme.io", "Abc1234!")).await.unwrap_err();
        assert_eq!(err.to_string(), "employee with this email already exists");

        api.fail_with(ApiError { message: "".into(), status: 502 });
        let err = svc.list().await.unwrap_err();
        assert_eq!(err.to_string(), LIST_FAILED);
        let err = svc.create(&CreateEmployeeRequest::new("Eva", "eva@acme.io", "Abc1234!")).await.unwrap_err();
        assert_eq!(err.to_string(), CREATE_FAILED);
    }
}
