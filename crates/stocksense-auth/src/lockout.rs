//! Progressive account lockout.
//!
//! [`LockoutTracker`] owns the durable store holding the [`SecurityState`]
//! and writes the state back after every mutation. Lock conditions are
//! reported as values ([`FailureOutcome`], [`LockStatus`]), never as errors.
//!
//! Persist failures inside a mutating call are logged and swallowed so a
//! broken disk cannot lock users out of the in-memory state; call
//! [`LockoutTracker::save`] to surface them.

use chrono::{DateTime, Duration, Utc};
use stocksense_storage::{JsonCodec, KeyValueStore, LoadOutcome};
use stocksense_types::constants::{PERMANENT_LOCK_STAGE, SECURITY_STORAGE_KEY};
use stocksense_types::{
    FailureOutcome, LockStatus, LockoutPolicy, RemainingTime, ResetOutcome, Result,
    SecurityState,
};

/// Lockout counter bound to its backing store.
#[derive(Debug)]
pub struct LockoutTracker<S: KeyValueStore> {
    store: S,
    key: String,
    policy: LockoutPolicy,
    state: SecurityState,
}

impl<S: KeyValueStore> LockoutTracker<S> {
    /// Load the state from `store` under the default key.
    pub fn load(store: S, policy: LockoutPolicy) -> (Self, LoadOutcome) {
        Self::load_with_key(store, SECURITY_STORAGE_KEY, policy)
    }

    /// Load the state from `store` under `key`. Missing or corrupt state
    /// falls back to a fresh counter.
    pub fn load_with_key(store: S, key: impl Into<String>, policy: LockoutPolicy) -> (Self, LoadOutcome) {
        let key = key.into();
        let (state, outcome) = JsonCodec::load_or_default::<S, SecurityState>(&store, &key);
        tracing::debug!(
            key = %key,
            failures = state.failures,
            stage = state.stage,
            loaded = outcome.is_loaded(),
            "security state loaded"
        );
        (
            Self {
                store,
                key,
                policy,
                state,
            },
            outcome,
        )
    }

    /// Record one failed login attempt at the current time.
    pub fn record_failure(&mut self) -> FailureOutcome {
        self.record_failure_at(Utc::now())
    }

    /// Record one failed login attempt at `now`.
    pub fn record_failure_at(&mut self, now: DateTime<Utc>) -> FailureOutcome {
        self.state.failures = self.state.failures.saturating_add(1);
        let failures = self.state.failures;

        if failures >= self.policy.permanent_after_failures() {
            self.state.permanently_locked = true;
            self.state.permanent_lock_time = Some(now);
            self.state.stage = PERMANENT_LOCK_STAGE;
            self.state.locked_until = None;
            self.persist();
            tracing::warn!(failures, "account permanently locked");
            return FailureOutcome::PermanentlyLocked {
                failures,
                lock_time: now,
            };
        }

        let temporary = self
            .policy
            .stage_for(failures)
            .and_then(|stage| Some((stage, self.policy.duration_for_stage(stage)?)));

        if let Some((stage, duration_secs)) = temporary {
            let lock_until = lock_end(now, duration_secs);
            self.state.stage = stage;
            self.state.locked_until = Some(lock_until);
            self.persist();
            tracing::info!(failures, stage, duration_secs, %lock_until, "temporary lock applied");
            return FailureOutcome::TemporarilyLocked {
                failures,
                stage,
                lock_until,
                duration_secs,
            };
        }

        self.persist();
        tracing::debug!(failures, "login failure recorded");
        FailureOutcome::Unlocked { failures }
    }

    /// Check whether login is currently blocked.
    pub fn check_locked(&mut self) -> LockStatus {
        self.check_locked_at(Utc::now())
    }

    /// Check whether login is blocked at `now`. An expired temporary lock is
    /// cleared (stage back to 0, failure count kept) and persisted.
    pub fn check_locked_at(&mut self, now: DateTime<Utc>) -> LockStatus {
        if self.state.permanently_locked {
            return LockStatus::PermanentlyLocked {
                lock_time: self.state.permanent_lock_time,
            };
        }

        let Some(lock_until) = self.state.locked_until else {
            return LockStatus::Unlocked;
        };

        if now < lock_until {
            let remaining = RemainingTime::from_millis((lock_until - now).num_milliseconds());
            return LockStatus::TemporarilyLocked {
                stage: self.state.stage,
                lock_until,
                remaining,
            };
        }

        self.state.locked_until = None;
        self.state.stage = 0;
        self.persist();
        tracing::debug!(failures = self.state.failures, "temporary lock expired");
        LockStatus::Unlocked
    }

    /// Clear the counter and every lock, including a permanent one.
    pub fn reset_security(&mut self) -> ResetOutcome {
        self.state = SecurityState::default();
        self.persist();
        tracing::info!("security state reset");
        ResetOutcome { success: true }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn security_state(&self) -> SecurityState {
        self.state.clone()
    }

    #[must_use]
    pub fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }

    /// Write the current state, propagating storage errors.
    pub fn save(&mut self) -> Result<()> {
        JsonCodec::save(&mut self.store, &self.key, &self.state)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store, e.g. to reload from it.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::error!(key = %self.key, error = %e, "failed to persist security state");
        }
    }
}

fn lock_end(now: DateTime<Utc>, duration_secs: u64) -> DateTime<Utc> {
    i64::try_from(duration_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|d| now.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
