//! File-backed durable store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a sibling temp file
//! first and are renamed into place, so a crash never leaves a half-written
//! blob behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stocksense_types::{Result, StockSenseError};

use crate::KeyValueStore;

/// Durable key-value store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StockSenseError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StockSenseError::StorageRead {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let write = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        write.map_err(|e| StockSenseError::StorageWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StockSenseError::StorageWrite {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
