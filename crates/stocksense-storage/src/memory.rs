//! In-memory storage implementation

use std::collections::HashMap;

use stocksense_types::{Result, StockSenseError};

use crate::KeyValueStore;

/// In-memory store for volatile data and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.into());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        if key.is_empty() {
            return Err(StockSenseError::InvalidKey(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
