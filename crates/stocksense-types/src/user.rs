//! User model.
//!
//! A [`User`] is the public view of an account. The password never lives
//! on this type; credential material is owned by the credential store.

use serde::{Deserialize, Serialize};

use crate::EmployeeId;

/// Access role of a portal account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

/// A portal account. Usernames are unique and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub role: Role,
    pub employee_id: EmployeeId,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
}

impl User {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        role: Role,
        employee_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            role,
            employee_id: EmployeeId::new(employee_id),
            display_name: display_name.into(),
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Fixture accounts for unit tests.
/// **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl User {
    /// A staff account with a derived employee id and display name.
    pub fn dummy(username: &str) -> Self {
        Self::new(
            username,
            Role::Staff,
            format!("EMP-TEST-{username}"),
            format!("Test {username}"),
        )
    }
}
