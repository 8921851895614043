use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Token pair returned by login and register.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// The signed-in account. Role flags and other server extras are carried
/// through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Reads a boolean role flag such as `is_staff`.
    pub fn flag(&self, name: &str) -> bool {
        self.extra.get(name).and_then(Value::as_bool).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_keeps_unknown_fields() {
        let json = r#"{"id": 4, "email": "ed@wezawire.co", "first_name": "Ed", "last_name": null, "is_staff": true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.full_name(), "Ed");
        assert!(user.flag("is_staff"));
        assert!(!user.flag("is_superuser"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["is_staff"], true);
    }

    #[test]
    fn login_response_without_user() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"access": "a", "refresh": "r"}"#).unwrap();
        assert!(response.user.is_none());
    }
}
