//! Login session model.
//!
//! At most one session exists at a time. It is created on successful login
//! and destroyed on logout or when a validation finds it past its TTL.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{EmployeeId, Role, SessionId, User};

/// The active login session, persisted in volatile storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub employee_id: EmployeeId,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: String,
    pub login_time: DateTime<Utc>,
    pub session_id: SessionId,
}

impl Session {
    /// Build a session for `user` that started at `login_time`.
    #[must_use]
    pub fn for_user(user: &User, login_time: DateTime<Utc>, session_id: SessionId) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
            employee_id: user.employee_id.clone(),
            display_name: user.display_name.clone(),
            login_time,
            session_id,
        }
    }

    /// Wall-clock time elapsed since login, as seen at `now`.
    #[must_use]
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.login_time
    }

    /// Whether the session has outlived `ttl` at `now`. A session exactly at
    /// the TTL boundary is still valid.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.elapsed_at(now) > ttl
    }
}

/// Why a session failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    NoSession,
    Expired,
}

impl InvalidReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSession => "no_session",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Valid(Session),
    Invalid(InvalidReason),
}

impl SessionStatus {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }

    #[must_use]
    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::Valid(session) => Some(session),
            Self::Invalid(_) => None,
        }
    }
}
