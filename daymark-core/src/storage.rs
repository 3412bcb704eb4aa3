//! Key-value persistence backends.
//!
//! The event store only ever reads and writes whole values under a single
//! key, so backends just need `get`/`set` on strings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{DaymarkError, DaymarkResult};

pub trait KeyValueStore {
    /// Returns `None` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> DaymarkResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> DaymarkResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DaymarkResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            DaymarkError::Storage(format!("Could not read {}: {e}", path.display()))
        })?;

        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> DaymarkResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DaymarkError::Storage(format!(
                "Could not create data directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path_for(key);

        // Atomic replace via rename
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;

        Ok(())
    }
}

/// In-memory backend, used by tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DaymarkResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DaymarkResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
