//! Caller-owned authentication context.
//!
//! [`AuthService`] bundles the account list, the lockout tracker (durable
//! store `D`) and the session manager (volatile store `V`). It exposes the
//! individual operations plus [`AuthService::login`], the login-form flow
//! that ties them together.

use chrono::{DateTime, Utc};
use stocksense_storage::{KeyValueStore, LoadOutcome};
use stocksense_types::{
    FailureOutcome, LockStatus, ResetOutcome, Result, SecurityState, Session, SessionStatus,
    StockSenseConfig, User,
};

use crate::{CredentialStore, LockoutTracker, SessionManager, failure_message};

/// Result of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Login is blocked; the attempt was not evaluated or counted.
    Locked(LockStatus),
    /// Bad credentials; the failure was recorded.
    Rejected {
        outcome: FailureOutcome,
        message: String,
    },
    /// Credentials matched; counter reset and a session started.
    Authenticated(Session),
}

impl LoginOutcome {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Credential, lockout and session state behind one handle.
#[derive(Debug)]
pub struct AuthService<D: KeyValueStore, V: KeyValueStore> {
    credentials: CredentialStore,
    lockout: LockoutTracker<D>,
    sessions: SessionManager<V>,
}

impl<D: KeyValueStore, V: KeyValueStore> AuthService<D, V> {
    /// Validate `config`, load the lockout state from `durable` and attach
    /// the demo accounts.
    pub fn open(durable: D, volatile: V, config: &StockSenseConfig) -> Result<(Self, LoadOutcome)> {
        config.validate()?;
        let (lockout, outcome) = LockoutTracker::load_with_key(
            durable,
            config.storage.security_key.clone(),
            config.security.clone(),
        );
        let sessions = SessionManager::new(volatile, &config.session);
        Ok((
            Self::from_parts(CredentialStore::demo(), lockout, sessions),
            outcome,
        ))
    }

    #[must_use]
    pub fn from_parts(
        credentials: CredentialStore,
        lockout: LockoutTracker<D>,
        sessions: SessionManager<V>,
    ) -> Self {
        Self {
            credentials,
            lockout,
            sessions,
        }
    }

    // ── Authentication ──────────────────────────────────────────────

    #[must_use]
    pub fn validate_user(&self, username: &str, password: &str) -> Option<User> {
        self.credentials.validate_user(username, password)
    }

    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.credentials.user_by_username(username)
    }

    /// Run the login-form flow at the current time.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        self.login_at(username, password, Utc::now())
    }

    /// Run the login-form flow at `now`:
    /// locked ⇒ refuse without counting; bad credentials ⇒ count and warn;
    /// good credentials ⇒ reset the counter and start a session.
    pub fn login_at(&mut self, username: &str, password: &str, now: DateTime<Utc>) -> LoginOutcome {
        let status = self.lockout.check_locked_at(now);
        if status.is_locked() {
            tracing::debug!(username, "login refused while locked");
            return LoginOutcome::Locked(status);
        }

        let Some(user) = self.credentials.validate_user(username, password) else {
            let outcome = self.lockout.record_failure_at(now);
            let message = failure_message(outcome.failures());
            tracing::info!(username, failures = outcome.failures(), "login rejected");
            return LoginOutcome::Rejected { outcome, message };
        };

        self.lockout.reset_security();
        let session = self.sessions.create_session_at(&user, now);
        tracing::info!(username = %user.username, role = %user.role, "login succeeded");
        LoginOutcome::Authenticated(session)
    }

    // ── Security ────────────────────────────────────────────────────

    pub fn record_failure(&mut self) -> FailureOutcome {
        self.lockout.record_failure()
    }

    pub fn check_locked(&mut self) -> LockStatus {
        self.lockout.check_locked()
    }

    pub fn reset_security(&mut self) -> ResetOutcome {
        self.lockout.reset_security()
    }

    #[must_use]
    pub fn security_state(&self) -> SecurityState {
        self.lockout.security_state()
    }

    #[must_use]
    pub fn failure_message(&self, failures: u32) -> String {
        failure_message(failures)
    }

    // ── Sessions ────────────────────────────────────────────────────

    pub fn create_session(&mut self, user: &User) -> Session {
        self.sessions.create_session(user)
    }

    #[must_use]
    pub fn get_session(&self) -> Option<Session> {
        self.sessions.get_session()
    }

    pub fn validate_session(&mut self) -> SessionStatus {
        self.sessions.validate_session()
    }

    pub fn validate_session_at(&mut self, now: DateTime<Utc>) -> SessionStatus {
        self.sessions.validate_session_at(now)
    }

    pub fn destroy_session(&mut self) {
        self.sessions.destroy_session();
    }

    // ── Parts ───────────────────────────────────────────────────────

    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    #[must_use]
    pub fn lockout(&self) -> &LockoutTracker<D> {
        &self.lockout
    }

    pub fn lockout_mut(&mut self) -> &mut LockoutTracker<D> {
        &mut self.lockout
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionManager<V> {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionManager<V> {
        &mut self.sessions
    }
}
