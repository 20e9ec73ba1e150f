//! Error types for the StockSense portal.
//!
//! All errors use the `SS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Storage errors
//! - 2xx: Authentication / lockout errors
//! - 3xx: Session errors
//! - 4xx: Dashboard errors
//! - 9xx: General errors
//!
//! Domain outcomes (wrong password, account locked, expired session) are
//! returned as values, not errors. Only infrastructure failures end up here.

use thiserror::Error;

/// Central error enum for all StockSense operations.
#[derive(Debug, Error)]
pub enum StockSenseError {
    // =================================================================
    // Storage Errors (1xx)
    // =================================================================
    /// Reading a key from the backing store failed.
    #[error("SS_ERR_100: Storage read failed for key {key}: {reason}")]
    StorageRead { key: String, reason: String },

    /// Writing a key to the backing store failed.
    #[error("SS_ERR_101: Storage write failed for key {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    /// The key is not usable by the backing store (empty, path separators, ...).
    #[error("SS_ERR_102: Invalid storage key: {0}")]
    InvalidKey(String),

    // =================================================================
    // Auth Errors (2xx)
    // =================================================================
    /// The lockout policy is not usable.
    #[error("SS_ERR_200: Invalid lockout policy: {reason}")]
    InvalidLockoutPolicy { reason: String },

    /// A credential seed was registered twice.
    #[error("SS_ERR_201: Duplicate username: {0}")]
    DuplicateUsername(String),

    // =================================================================
    // Session Errors (3xx)
    // =================================================================
    /// Session TTL must be positive.
    #[error("SS_ERR_300: Invalid session TTL: {minutes} minutes")]
    InvalidSessionTtl { minutes: i64 },

    // =================================================================
    // Dashboard Errors (4xx)
    // =================================================================
    /// A timestamp could not be parsed.
    #[error("SS_ERR_400: Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("SS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (disk).
    #[error("SS_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, StockSenseError>;

// Conversion from std::io::Error
impl From<std::io::Error> for StockSenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StockSenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = StockSenseError::InvalidKey(String::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("SS_ERR_102"), "Got: {msg}");
    }

    #[test]
    fn storage_write_display() {
        let err = StockSenseError::StorageWrite {
            key: "stockSenseSecurity".into(),
            reason: "disk full".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("SS_ERR_101"));
        assert!(msg.contains("stockSenseSecurity"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn serde_json_error_converts() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StockSenseError = parse.into();
        assert!(matches!(err, StockSenseError::Serialization(_)));
    }

    #[test]
    fn all_errors_have_ss_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(StockSenseError::InvalidLockoutPolicy {
                reason: "empty".into(),
            }),
            Box::new(StockSenseError::DuplicateUsername("admin".into())),
            Box::new(StockSenseError::InvalidSessionTtl { minutes: 0 }),
            Box::new(StockSenseError::InvalidTimestamp("nope".into())),
            Box::new(StockSenseError::from(std::io::Error::other("boom"))),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SS_ERR_"),
                "Error missing SS_ERR_ prefix: {msg}"
            );
        }
    }
}
