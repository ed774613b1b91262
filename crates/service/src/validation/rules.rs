use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldError, Rule};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub(crate) const NAME_REQUIRED: FieldError = FieldError::new(Rule::Required, "Name is required");
pub(crate) const EMAIL_REQUIRED: FieldError = FieldError::new(Rule::Required, "Email is required");
pub(crate) const EMAIL_FORMAT: FieldError = FieldError::new(Rule::Format, "Email is not valid");
pub(crate) const PASSWORD_REQUIRED: FieldError = FieldError::new(Rule::Required, "Password is required");
const PASSWORD_LENGTH: FieldError =
    FieldError::new(Rule::Length, "Password must be at least 8 characters long");
const PASSWORD_UPPERCASE: FieldError =
    FieldError::new(Rule::Uppercase, "Password must contain at least one uppercase letter");
const PASSWORD_DIGIT: FieldError = FieldError::new(Rule::Digit, "Password must contain at least one number");
const PASSWORD_SPECIAL: FieldError =
    FieldError::new(Rule::Special, "Password must contain at least one special character");

/// `required` when blank after trimming, `format` when the raw value is not
/// `local@domain.tld`.
pub fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    if !EMAIL_RE.is_match(email) {
        return Some(EMAIL_FORMAT);
    }
    None
}

/// Strength policy for new passwords. Reports only the first failing rule,
/// in the order length, uppercase, digit, special.
pub fn check_password_policy(password: &str) -> Option<FieldError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(PASSWORD_LENGTH);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(PASSWORD_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(PASSWORD_DIGIT);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Some(PASSWORD_SPECIAL);
    }
    None
}
