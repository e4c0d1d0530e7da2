//! User model for login.
//!
//! Login is a static credential lookup over seeded users; there is no real
//! authentication or authorization system behind it.

use serde::{Deserialize, Serialize};

/// A user account known to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric id.
    pub id: u32,
    /// Login username.
    pub username: String,
    /// Login password, stored in the clear in the mock user table.
    pub password: String,
    /// The user's role (e.g., "HR Manager").
    pub role: String,
    /// The user's display name.
    pub name: String,
    /// The employee record this user corresponds to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// The view of a user returned after a successful login.
///
/// Identical to [`User`] minus the password, which is never echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Unique numeric id.
    pub id: u32,
    /// Login username.
    pub username: String,
    /// The user's role.
    pub role: String,
    /// The user's display name.
    pub name: String,
    /// The employee record this user corresponds to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        AuthenticatedUser {
            id: user.id,
            username: user.username,
            role: user.role,
            name: user.name,
            employee_id: user.employee_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 1,
            username: "hrmanager".to_string(),
            password: "password".to_string(),
            role: "HR Manager".to_string(),
            name: "Priya Sharma".to_string(),
            employee_id: None,
        }
    }

    #[test]
    fn test_authenticated_user_drops_password() {
        let user = create_test_user();
        let authenticated: AuthenticatedUser = user.into();

        let json = serde_json::to_string(&authenticated).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"username\":\"hrmanager\""));
    }

    #[test]
    fn test_employee_id_omitted_when_none() {
        let authenticated: AuthenticatedUser = create_test_user().into();
        let json = serde_json::to_string(&authenticated).unwrap();
        assert!(!json.contains("employee_id"));
    }

    #[test]
    fn test_employee_id_present_when_some() {
        let mut user = create_test_user();
        user.employee_id = Some("EMP001".to_string());

        let authenticated: AuthenticatedUser = user.into();
        let json = serde_json::to_string(&authenticated).unwrap();
        assert!(json.contains("\"employee_id\":\"EMP001\""));
    }
}
