//! In-memory stand-in for the backend, for tests and doc examples.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use models::{ApiError, CreateEmployeeRequest, Credentials, Employee, LoginResponse};

use super::PortalApi;

#[derive(Default)]
struct MockState {
    users: Vec<(String, String, LoginResponse)>,
    employees: Vec<Employee>,
    fail_with: Option<ApiError>,
    seen_tokens: Vec<Option<String>>,
    calls: usize,
}

/// Accepts the registered users, requires `Bearer <token>` of an issued
/// login on employee calls, and can be told to fail every call.
#[derive(Default)]
pub struct MockPortalApi {
    state: Mutex<MockState>,
}

impl MockPortalApi {
    pub fn new() -> Self { Self::default() }

    pub fn with_user(self, email: &str, password: &str, response: LoginResponse) -> Self {
        self.lock().users.push((email.to_string(), password.to_string(), response));
        self
    }

    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        self.lock().employees = employees;
        self
    }

    /// Make every following call fail with `err`.
    pub fn fail_with(&self, err: ApiError) {
        self.lock().fail_with = Some(err);
    }

    /// Number of calls received, of any kind.
    pub fn calls(&self) -> usize { self.lock().calls }

    /// Tokens passed to employee calls, in order.
    pub fn seen_tokens(&self) -> Vec<Option<String>> { self.lock().seen_tokens.clone() }

    pub fn employees(&self) -> Vec<Employee> { self.lock().employees.clone() }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn authorize(state: &mut MockState, token: Option<&str>) -> Result<(), ApiError> {
        state.seen_tokens.push(token.map(str::to_string));
        let known = token.is_some_and(|t| state.users.iter().any(|(_, _, r)| r.token == t));
        if known { Ok(()) } else { Err(ApiError::from_response(401, "Unauthorized")) }
    }
}

#[async_trait]
impl PortalApi for MockPortalApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let mut state = self.lock();
        state.calls += 1;
        if let Some(err) = state.fail_with.clone() {
            return Err(err);
        }
        let found = state
            .users
            .iter()
            .find(|(e, p, _)| *e == credentials.email && *p == credentials.password)
            .map(|(_, _, r)| r.clone());
        found.ok_or_else(|| ApiError::from_response(401, "Invalid email or password"))
    }

    async fn list_employees(&self, token: Option<&str>) -> Result<Vec<Employee>, ApiError> {
        let mut state = self.lock();
        state.calls += 1;
        if let Some(err) = state.fail_with.clone() {
            return Err(err);
        }
        Self::authorize(&mut state, token)?;
        Ok(state.employees.clone())
    }

    async fn create_employee(
        &self,
        request: &CreateEmployeeRequest,
        token: Option<&str>,
    ) -> Result<Employee, ApiError> {
        let mut state = self.lock();
        state.calls += 1;
        if let Some(err) = state.fail_with.clone() {
            return Err(err);
        }
        Self::authorize(&mut state, token)?;
        if state.employees.iter().any(|e| e.email == request.email) {
            return Err(ApiError::from_response(409, "employee with this email already exists"));
        }
        let employee = Employee {
            id: format!("emp-{}", state.employees.len() + 1),
            name: request.name.clone(),
            email: request.email.clone(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        state.employees.push(employee.clone());
        Ok(employee)
    }
}
