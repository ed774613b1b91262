use models::{CreateEmployeeRequest, Credentials};

use super::rules::{check_email, check_password_policy, NAME_REQUIRED, PASSWORD_REQUIRED};
use super::{Field, ValidationErrors};

/// Login form: email presence and format, password presence only.
pub fn validate_login(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Some(e) = check_email(&credentials.email) {
        errors.add(Field::Email, e);
    }
    if credentials.password.is_empty() {
        errors.add(Field::Password, PASSWORD_REQUIRED);
    }
    errors
}

/// Employee creation form: name, email and the full password policy.
pub fn validate_new_employee(request: &CreateEmployeeRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if request.name.trim().is_empty() {
        errors.add(Field::Name, NAME_REQUIRED);
    }
    if let Some(e) = check_email(&request.email) {
        errors.add(Field::Email, e);
    }
    if request.password.is_empty() {
        errors.add(Field::Password, PASSWORD_REQUIRED);
    } else if let Some(e) = check_password_policy(&request.password) {
        errors.add(Field::Password, e);
    }
    errors
}
