//! Identifiers used throughout StockSense.
//!
//! All identifiers are opaque strings on the wire (`#[serde(transparent)]`)
//! so the persisted JSON stays a flat record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Identifier of a login session, `sess_` followed by base-36 characters.
///
/// Not a security token: the suffix comes from a non-cryptographic source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Build a session id from its random suffix.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        Self(format!("{}{suffix}", constants::SESSION_ID_PREFIX))
    }

    /// The part after the `sess_` prefix, if the prefix is present.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.0.strip_prefix(constants::SESSION_ID_PREFIX)
    }

    /// Whether the id has the prefix and a lowercase base-36 suffix of the
    /// expected length.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.suffix().is_some_and(|s| {
            s.len() == constants::SESSION_ID_SUFFIX_LEN
                && s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// EmployeeId
// ---------------------------------------------------------------------------

/// Company employee number, e.g. `EMP-2024-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// InvoiceId
// ---------------------------------------------------------------------------

/// Sales invoice number, e.g. `INV-2024-1001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub String);

impl InvoiceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_from_suffix() {
        let id = SessionId::from_suffix("abc123xyz");
        assert_eq!(id.as_str(), "sess_abc123xyz");
        assert_eq!(id.suffix(), Some("abc123xyz"));
        assert!(id.is_well_formed());
    }

    #[test]
    fn session_id_rejects_bad_shapes() {
        assert!(!SessionId("abc123xyz".into()).is_well_formed());
        assert!(!SessionId("sess_ABC123XYZ".into()).is_well_formed());
        assert!(!SessionId("sess_short".into()).is_well_formed());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&EmployeeId::new("EMP-2024-001")).unwrap();
        assert_eq!(json, "\"EMP-2024-001\"");
        let back: InvoiceId = serde_json::from_str("\"INV-2024-1001\"").unwrap();
        assert_eq!(back.to_string(), "INV-2024-1001");
    }
}
