//! Configuration types for the StockSense portal.
//!
//! Every section has a `Default` matching the stock demo behaviour, and all
//! fields are `#[serde(default)]` so a config file only needs the keys it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, StockSenseError, constants};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSenseConfig {
    pub security: LockoutPolicy,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub portal: PortalConfig,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl StockSenseConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| StockSenseError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StockSenseError::Configuration(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.security.validate()?;
        self.session.validate()?;
        if self.storage.security_key.is_empty() || self.session.storage_key.is_empty() {
            return Err(StockSenseError::Configuration(
                "storage keys must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for StockSenseConfig {
    fn default() -> Self {
        Self {
            security: LockoutPolicy::default(),
            session: SessionConfig::default(),
            storage: StorageConfig::default(),
            portal: PortalConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Progressive lockout policy.
///
/// The first `lock_after_failures` − 1 failures only warn. Each further
/// failure applies the next temporary lock from `stage_durations_secs`.
/// One failure past the last stage locks the account permanently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockoutPolicy {
    pub lock_after_failures: u32,
    pub stage_durations_secs: Vec<u64>,
}

impl LockoutPolicy {
    /// Number of temporary lock stages.
    #[must_use]
    pub fn stage_count(&self) -> u32 {
        u32::try_from(self.stage_durations_secs.len()).unwrap_or(u32::MAX)
    }

    /// Failure count that triggers the permanent lock (6 by default).
    #[must_use]
    pub fn permanent_after_failures(&self) -> u32 {
        self.lock_after_failures.saturating_add(self.stage_count())
    }

    /// Temporary lock stage for a failure count, or `None` outside the
    /// temporary range.
    #[must_use]
    pub fn stage_for(&self, failures: u32) -> Option<u8> {
        if failures < self.lock_after_failures || failures >= self.permanent_after_failures() {
            return None;
        }
        u8::try_from(failures - self.lock_after_failures + 1).ok()
    }

    /// Lock duration in seconds for a 1-based stage.
    #[must_use]
    pub fn duration_for_stage(&self, stage: u8) -> Option<u64> {
        let idx = usize::from(stage).checked_sub(1)?;
        self.stage_durations_secs.get(idx).copied()
    }

    pub fn validate(&self) -> Result<()> {
        if self.lock_after_failures == 0 {
            return Err(StockSenseError::InvalidLockoutPolicy {
                reason: "lock_after_failures must be at least 1".into(),
            });
        }
        if self.stage_durations_secs.is_empty() {
            return Err(StockSenseError::InvalidLockoutPolicy {
                reason: "at least one lock stage is required".into(),
            });
        }
        // Stage 4 is reserved for the permanent lock.
        if self.stage_durations_secs.len() >= usize::from(constants::PERMANENT_LOCK_STAGE) {
            return Err(StockSenseError::InvalidLockoutPolicy {
                reason: format!(
                    "at most {} temporary stages are supported",
                    constants::PERMANENT_LOCK_STAGE - 1
                ),
            });
        }
        Ok(())
    }
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            lock_after_failures: constants::DEFAULT_LOCK_AFTER_FAILURES,
            stage_durations_secs: constants::DEFAULT_STAGE_DURATIONS_SECS.to_vec(),
        }
    }
}

/// Session lifetime and storage location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_minutes: i64,
    pub storage_key: String,
}

impl SessionConfig {
    /// Session lifetime. Falls back to the default TTL if `ttl_minutes` is
    /// out of range for a duration (rejected by [`SessionConfig::validate`]).
    #[must_use]
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::try_minutes(self.ttl_minutes)
            .unwrap_or_else(|| chrono::Duration::minutes(constants::DEFAULT_SESSION_TTL_MINUTES))
    }

    pub fn validate(&self) -> Result<()> {
        if self.ttl_minutes <= 0 || chrono::Duration::try_minutes(self.ttl_minutes).is_none() {
            return Err(StockSenseError::InvalidSessionTtl {
                minutes: self.ttl_minutes,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: constants::DEFAULT_SESSION_TTL_MINUTES,
            storage_key: constants::SESSION_STORAGE_KEY.to_string(),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the file-backed durable store.
    pub data_dir: String,
    pub security_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: ".stocksense".to_string(),
            security_key: constants::SECURITY_STORAGE_KEY.to_string(),
        }
    }
}

/// Navigation targets and user-facing strings of the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub login_page: String,
    pub dashboard_page: String,
    pub expired_message: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_page: constants::DEFAULT_LOGIN_PAGE.to_string(),
            dashboard_page: constants::DEFAULT_DASHBOARD_PAGE.to_string(),
            expired_message: constants::SESSION_EXPIRED_MESSAGE.to_string(),
        }
    }
}
