//! Storage trait definitions

use stocksense_types::Result;

/// String key-value storage, the shape of browser `localStorage` /
/// `sessionStorage`.
///
/// Writes take `&mut self`: a store is owned by exactly one context object.
pub trait KeyValueStore {
    /// Read a key. Absent keys are `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a key.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove a key. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
