//! Typed JSON encode/decode over a [`KeyValueStore`].
//!
//! The lenient loader never fails: unreadable or corrupt blobs are logged
//! and replaced by the type's default. The returned [`LoadOutcome`] tells
//! callers which of those happened.

use serde::Serialize;
use serde::de::DeserializeOwned;
use stocksense_types::Result;

use crate::KeyValueStore;

/// How a lenient load obtained its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored value decoded successfully.
    Loaded,
    /// Nothing was stored under the key; default used.
    Missing,
    /// A value was stored but did not decode; default used.
    Corrupt { reason: String },
    /// The backend failed to read; default used.
    Unavailable { reason: String },
}

impl LoadOutcome {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Whether the caller is running on a substituted default value.
    #[must_use]
    pub fn used_default(&self) -> bool {
        !self.is_loaded()
    }
}

/// JSON codec for values kept in a key-value store.
pub struct JsonCodec;

impl JsonCodec {
    pub fn encode<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode `value` and write it under `key`.
    pub fn save<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
    where
        S: KeyValueStore + ?Sized,
        T: Serialize,
    {
        let raw = Self::encode(value)?;
        store.set(key, raw)
    }

    /// Strict load: absent is `Ok(None)`, read and decode failures are errors.
    pub fn load<S, T>(store: &S, key: &str) -> Result<Option<T>>
    where
        S: KeyValueStore + ?Sized,
        T: DeserializeOwned,
    {
        store.get(key)?.map(|raw| Self::decode(&raw)).transpose()
    }

    /// Lenient load: always yields a value, falling back to `T::default()`.
    pub fn load_or_default<S, T>(store: &S, key: &str) -> (T, LoadOutcome)
    where
        S: KeyValueStore + ?Sized,
        T: DeserializeOwned + Default,
    {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (T::default(), LoadOutcome::Missing),
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed, using defaults");
                return (
                    T::default(),
                    LoadOutcome::Unavailable {
                        reason: e.to_string(),
                    },
                );
            }
        };

        match Self::decode(&raw) {
            Ok(value) => (value, LoadOutcome::Loaded),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is corrupt, using defaults");
                (
                    T::default(),
                    LoadOutcome::Corrupt {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }
}
