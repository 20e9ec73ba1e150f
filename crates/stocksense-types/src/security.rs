//! Account lockout state and the descriptors returned by lockout checks.
//!
//! The lockout counter escalates through stages:
//!
//! | failures | stage | effect             |
//! |----------|-------|--------------------|
//! | 1–2      | 0     | warning only       |
//! | 3        | 1     | locked 30s         |
//! | 4        | 2     | locked 30s         |
//! | 5        | 3     | locked 1min        |
//! | 6+       | 4     | permanently locked |
//!
//! [`SecurityState`] is persisted verbatim after every mutation, so its
//! serde layout is the storage format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted lockout counter. One instance per portal installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityState {
    /// Cumulative failed attempts since the last reset.
    #[serde(alias = "failureCount")]
    pub failures: u32,
    /// Escalation stage, 0..=4.
    pub stage: u8,
    /// End of the current temporary lock. Only set while stage is 1..=3.
    pub locked_until: Option<DateTime<Utc>>,
    /// Terminal lock; cleared only by a reset.
    pub permanently_locked: bool,
    /// When the permanent lock was applied.
    pub permanent_lock_time: Option<DateTime<Utc>>,
}

impl SecurityState {
    /// A fresh, unlocked state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a temporary lock end is recorded (it may already be in the past).
    #[must_use]
    pub fn has_temporary_lock(&self) -> bool {
        self.locked_until.is_some()
    }
}

/// Result of recording one failed login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureOutcome {
    /// Below the lock threshold.
    Unlocked { failures: u32 },
    /// A timed lock was applied.
    TemporarilyLocked {
        failures: u32,
        stage: u8,
        lock_until: DateTime<Utc>,
        duration_secs: u64,
    },
    /// The account is now permanently locked.
    PermanentlyLocked {
        failures: u32,
        lock_time: DateTime<Utc>,
    },
}

impl FailureOutcome {
    #[must_use]
    pub fn failures(&self) -> u32 {
        match self {
            Self::Unlocked { failures }
            | Self::TemporarilyLocked { failures, .. }
            | Self::PermanentlyLocked { failures, .. } => *failures,
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !matches!(self, Self::Unlocked { .. })
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::PermanentlyLocked { .. })
    }

    /// Lock stage, 0 when no lock was applied.
    #[must_use]
    pub fn stage(&self) -> u8 {
        match self {
            Self::Unlocked { .. } => 0,
            Self::TemporarilyLocked { stage, .. } => *stage,
            Self::PermanentlyLocked { .. } => crate::constants::PERMANENT_LOCK_STAGE,
        }
    }

    /// Temporary lock length in (possibly fractional) minutes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn minutes(&self) -> Option<f64> {
        match self {
            Self::TemporarilyLocked { duration_secs, .. } => Some(*duration_secs as f64 / 60.0),
            _ => None,
        }
    }
}

/// Time left on a temporary lock, for countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub ms: i64,
    /// Whole seconds remaining.
    pub seconds: i64,
    /// Whole minutes remaining.
    pub minutes: i64,
    /// Seconds past the whole minutes (`seconds % 60`).
    pub seconds_part: i64,
}

impl RemainingTime {
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        let seconds = ms / 1000;
        Self {
            ms,
            seconds,
            minutes: seconds / 60,
            seconds_part: seconds % 60,
        }
    }

    /// `MM:SS`, zero padded.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds_part)
    }
}

impl std::fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds_part)
    }
}

/// Result of checking whether login is currently allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LockStatus {
    Unlocked,
    TemporarilyLocked {
        stage: u8,
        lock_until: DateTime<Utc>,
        remaining: RemainingTime,
    },
    PermanentlyLocked {
        lock_time: Option<DateTime<Utc>>,
    },
}

impl LockStatus {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        !matches!(self, Self::Unlocked)
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::PermanentlyLocked { .. })
    }

    #[must_use]
    pub fn remaining(&self) -> Option<RemainingTime> {
        match self {
            Self::TemporarilyLocked { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }
}

/// Acknowledgement returned by a security reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOutcome {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unlocked() {
        let state = SecurityState::new();
        assert_eq!(state.failures, 0);
        assert_eq!(state.stage, 0);
        assert!(!state.permanently_locked);
        assert!(!state.has_temporary_lock());
        assert!(state.permanent_lock_time.is_none());
    }

    #[test]
    fn state_wire_format_matches_storage_layout() {
        let state = SecurityState {
            failures: 3,
            stage: 1,
            locked_until: Some("2024-02-28T02:30:30Z".parse().unwrap()),
            ..SecurityState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["failures"], 3);
        assert_eq!(json["stage"], 1);
        assert_eq!(json["permanentlyLocked"], false);
        assert!(json["permanentLockTime"].is_null());
        assert!(json["lockedUntil"].as_str().unwrap().starts_with("2024-02-28T02:30:30"));
    }

    #[test]
    fn state_reads_browser_written_blob() {
        let blob = r#"{"failures":2,"stage":0,"lockedUntil":null,"permanentlyLocked":false,"permanentLockTime":null}"#;
        let state: SecurityState = serde_json::from_str(blob).unwrap();
        assert_eq!(state.failures, 2);

        let aliased = r#"{"failureCount":4,"stage":2,"lockedUntil":"2024-02-28T10:30:00.000Z","permanentlyLocked":false,"permanentLockTime":null}"#;
        let state: SecurityState = serde_json::from_str(aliased).unwrap();
        assert_eq!(state.failures, 4);
        assert!(state.has_temporary_lock());
    }

    #[test]
    fn remaining_time_display() {
        let r = RemainingTime::from_millis(59_999);
        assert_eq!(r.seconds, 59);
        assert_eq!(r.minutes, 0);
        assert_eq!(r.display(), "00:59");

        let r = RemainingTime::from_millis(61_500);
        assert_eq!(r.minutes, 1);
        assert_eq!(r.seconds_part, 1);
        assert_eq!(r.to_string(), "01:01");
    }

    #[test]
    fn remaining_time_clamps_negative() {
        let r = RemainingTime::from_millis(-5);
        assert_eq!(r.ms, 0);
        assert_eq!(r.display(), "00:00");
    }

    #[test]
    fn failure_outcome_accessors() {
        let unlocked = FailureOutcome::Unlocked { failures: 2 };
        assert!(!unlocked.is_locked());
        assert_eq!(unlocked.stage(), 0);
        assert_eq!(unlocked.minutes(), None);

        let temp = FailureOutcome::TemporarilyLocked {
            failures: 5,
            stage: 3,
            lock_until: Utc::now(),
            duration_secs: 60,
        };
        assert!(temp.is_locked());
        assert!(!temp.is_permanent());
        assert_eq!(temp.minutes(), Some(1.0));
        assert_eq!(temp.failures(), 5);

        let perm = FailureOutcome::PermanentlyLocked {
            failures: 6,
            lock_time: Utc::now(),
        };
        assert!(perm.is_permanent());
        assert_eq!(perm.stage(), 4);
    }
}
