// SPDX-License-Identifier: MIT

//! File-backed string key-value store.
//!
//! One JSON object of string keys and string values, rewritten atomically on
//! every mutation (temp file + rename). Reads and writes are synchronous;
//! the host is single-threaded so no locking is needed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Durable string-keyed store backing the session tracker.
#[derive(Debug)]
pub struct LocalStore {
    /// Backing file; `None` keeps the store in memory (tests, dry runs).
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open a store backed by `path`, loading existing entries if the file
    /// exists. The parent directory must already exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| AppError::Store(format!("Failed to read {}: {}", path.display(), e)))?;
            serde_json::from_str(&raw).map_err(|e| {
                AppError::Deserialization(format!("Corrupt store file {}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// Create a store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    /// Read the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Write `value` under `key` and persist.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.into());
        self.persist()
    }

    /// Remove `key` and persist. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<(), AppError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// Rewrite the backing file atomically.
    fn persist(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::Internal(e.into()))?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, raw)
            .map_err(|e| AppError::Store(format!("Failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, path)
            .map_err(|e| AppError::Store(format!("Failed to replace {}: {}", path.display(), e)))?;

        Ok(())
    }
}
