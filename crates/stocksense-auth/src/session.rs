//! Single login session kept in a volatile store.
//!
//! Expiry is passive: the TTL is only compared against the wall clock when
//! the session is validated, and an expired session is destroyed then.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use stocksense_storage::{JsonCodec, KeyValueStore, LoadOutcome};
use stocksense_types::constants::SESSION_ID_SUFFIX_LEN;
use stocksense_types::{
    InvalidReason, Session, SessionConfig, SessionId, SessionStatus, User,
};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a `sess_` id with a random base-36 suffix.
///
/// Collisions are possible and the value is guessable enough that it must
/// not be used as a bearer token.
#[must_use]
pub fn generate_session_id() -> SessionId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    SessionId::from_suffix(&suffix)
}

/// Creates, reads, validates and destroys the one active session.
#[derive(Debug)]
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    key: String,
    ttl: Duration,
}

impl<S: KeyValueStore> SessionManager<S> {
    #[must_use]
    pub fn new(store: S, config: &SessionConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            ttl: config.ttl(),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for `user` now, replacing any existing one.
    pub fn create_session(&mut self, user: &User) -> Session {
        self.create_session_at(user, Utc::now())
    }

    /// Start a session for `user` with login time `now`.
    pub fn create_session_at(&mut self, user: &User, now: DateTime<Utc>) -> Session {
        let session = Session::for_user(user, now, generate_session_id());
        if let Err(e) = JsonCodec::save(&mut self.store, &self.key, &session) {
            tracing::error!(key = %self.key, error = %e, "failed to persist session");
        }
        tracing::info!(
            username = %session.username,
            session_id = %session.session_id,
            "session created"
        );
        session
    }

    /// The stored session, or `None` if absent or unreadable.
    #[must_use]
    pub fn get_session(&self) -> Option<Session> {
        self.load_session().0
    }

    /// The stored session together with how it was obtained.
    pub fn load_session(&self) -> (Option<Session>, LoadOutcome) {
        JsonCodec::load_or_default::<S, Option<Session>>(&self.store, &self.key)
    }

    /// Validate the stored session against the current time.
    pub fn validate_session(&mut self) -> SessionStatus {
        self.validate_session_at(Utc::now())
    }

    /// Validate the stored session at `now`. An expired session is destroyed.
    pub fn validate_session_at(&mut self, now: DateTime<Utc>) -> SessionStatus {
        let Some(session) = self.get_session() else {
            return SessionStatus::Invalid(InvalidReason::NoSession);
        };

        if session.is_expired_at(now, self.ttl) {
            tracing::info!(
                username = %session.username,
                elapsed_minutes = session.elapsed_at(now).num_minutes(),
                "session expired"
            );
            self.destroy_session();
            return SessionStatus::Invalid(InvalidReason::Expired);
        }

        SessionStatus::Valid(session)
    }

    /// Remove the stored session. Safe to call when none exists.
    pub fn destroy_session(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::error!(key = %self.key, error = %e, "failed to remove session");
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
