//! In-memory user store for login.
//!
//! A static credential table; there is no hashing, session management, or
//! authorization behind it.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuthenticatedUser, User};

/// Read-only user collection.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Creates a store holding the given users.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Creates a store seeded with the sample user fixtures.
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            User {
                id: 1,
                username: "hrmanager".to_string(),
                password: "password".to_string(),
                role: "HR Manager".to_string(),
                name: "Priya Sharma".to_string(),
                employee_id: None,
            },
            User {
                id: 2,
                username: "finance".to_string(),
                password: "password".to_string(),
                role: "Finance Team".to_string(),
                name: "Rahul Verma".to_string(),
                employee_id: None,
            },
            User {
                id: 3,
                username: "employee".to_string(),
                password: "password".to_string(),
                role: "Employee".to_string(),
                name: "Ankit Patel".to_string(),
                employee_id: Some("EMP001".to_string()),
            },
        ])
    }

    /// Checks a username/password pair against the user table.
    ///
    /// Returns the matching user without its password, or
    /// [`EngineError::InvalidCredentials`] if no user matches.
    pub fn authenticate(&self, username: &str, password: &str) -> EngineResult<AuthenticatedUser> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
            .map(AuthenticatedUser::from)
            .ok_or(EngineError::InvalidCredentials)
    }
}
