//! Form validation.
//!
//! Every check is a pure function returning a field → error mapping; an
//! empty mapping means the form may be submitted.

mod rules;
mod forms;

use std::collections::BTreeMap;
use std::fmt;

pub use forms::{validate_login, validate_new_employee};
pub use rules::{check_email, check_password_policy, MIN_PASSWORD_LEN, SPECIAL_CHARACTERS};

/// Form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Format,
    Length,
    Uppercase,
    Digit,
    Special,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(rule: Rule, message: &'static str) -> Self { Self { rule, message } }
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    /// Record an error unless the field already has one.
    pub fn add(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn is_empty(&self) -> bool { self.errors.is_empty() }

    pub fn len(&self) -> usize { self.errors.len() }

    pub fn get(&self, field: Field) -> Option<&FieldError> { self.errors.get(&field) }

    pub fn rule(&self, field: Field) -> Option<Rule> { self.get(field).map(|e| e.rule) }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    /// `Ok(())` when empty, the errors otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", err.message)?;
            first = false;
        }
        Ok(())
    }
}
