//! User accounts and the sanitized session representation.

use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// Wrapper for the password that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` only to compare credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Stored account. Only ever lives inside the auth service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: SecureString,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Copy without the secret, safe to hand to application state.
    pub fn sanitized(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Sanitized user held in application state and mirrored to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: SecureString,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_is_redacted() {
        let secret = SecureString::new("alex123");
        assert_eq!(format!("{}", secret), "••••••••");
        assert!(!format!("{:?}", secret).contains("alex123"));
        assert_eq!(secret.expose(), "alex123");
    }

    #[test]
    fn session_user_json_has_no_password() {
        let user = User {
            id: 1,
            username: "alex".into(),
            password: SecureString::new("alex123"),
            email: "alex@company.com".into(),
            first_name: "Alex".into(),
            last_name: "Johnson".into(),
        };
        let json = serde_json::to_value(user.sanitized()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Alex");
    }

    #[test]
    fn display_name_without_last_name() {
        let user = SessionUser {
            id: 4,
            username: "kim".into(),
            email: "kim@company.com".into(),
            first_name: "Kim".into(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "Kim");
    }
}
