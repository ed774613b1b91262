use serde::{Deserialize, Serialize};

/// Login form input. Built per submission and dropped afterwards.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let c = Credentials::new("a@b.com", "Secret1!");
        let out = format!("{c:?}");
        assert!(out.contains("a@b.com"));
        assert!(!out.contains("Secret1!"));
    }

    #[test]
    fn serializes_snake_case_fields() {
        let c = Credentials::new("a@b.com", "pw");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({"email": "a@b.com", "password": "pw"}));
    }
}
