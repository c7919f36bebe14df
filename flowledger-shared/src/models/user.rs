use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to an account by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Customer,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err("unknown user role"),
        }
    }
}

/// Credentials submitted to `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /login`.
///
/// On failure only `success` and (usually) `message` are populated, so every
/// identity field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body returned by `GET /auth/status`, the startup session probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthStatus {
    pub logged_in: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"customer\"").unwrap(),
            UserRole::Customer
        );
    }

    #[test]
    fn role_from_str_matches_as_str() {
        for role in [UserRole::Admin, UserRole::Customer] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("operator".parse::<UserRole>().is_err());
    }

    #[test]
    fn failed_login_parses_without_identity_fields() {
        let body = r#"{"success": false, "message": "密码错误"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("密码错误"));
        assert!(response.user_id.is_none());
        assert!(response.role.is_none());
    }

    #[test]
    fn successful_login_carries_identity() {
        let body = r#"{"success": true, "user_id": 7, "username": "li", "role": "customer"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.user_id, Some(7));
        assert_eq!(response.role, Some(UserRole::Customer));
        assert!(response.message.is_none());
    }

    #[test]
    fn logged_out_status_is_minimal() {
        let status: AuthStatus = serde_json::from_str(r#"{"logged_in": false}"#).unwrap();
        assert!(!status.logged_in);
        assert!(status.user_id.is_none());
    }
}
