//! Key-value persistence for user preferences
//!
//! The game persists exactly one key: the JSON-encoded active-deck id
//! list. The trait is object-safe so the session can hold any store
//! behind a box; writes return a Result so callers can decide whether a
//! failed save is worth surfacing.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use ahash::AHashMap;

use crate::core::error::{GameError, Result};

/// Minimal persistent string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Store keeping one file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(|e| GameError::Store {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| GameError::Store {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        fs::write(self.path_for(key), value).map_err(|e| GameError::Store {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<AHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the store to a session
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("active_decks").unwrap().is_none());

        store.set("active_decks", r#"["general"]"#).unwrap();
        assert_eq!(
            store.get("active_decks").unwrap().as_deref(),
            Some(r#"["general"]"#)
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "cartegories-store-test-{}",
            std::process::id()
        ));
        let store = FileStore::new(&dir);

        assert!(store.get("active_decks").unwrap().is_none());

        store.set("active_decks", r#"["general","music"]"#).unwrap();
        assert_eq!(
            store.get("active_decks").unwrap().as_deref(),
            Some(r#"["general","music"]"#)
        );

        // Overwrite wins
        store.set("active_decks", r#"["music"]"#).unwrap();
        assert_eq!(
            store.get("active_decks").unwrap().as_deref(),
            Some(r#"["music"]"#)
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
