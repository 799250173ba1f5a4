//! Key-value storage for persisted records
//!
//! Values are opaque JSON strings; encoding lives in [`crate::persist`].

use directories::ProjectDirs;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for store access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("cannot access '{key}'")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Minimal string store keyed by record name
pub trait KeyValueStore {
    /// # Errors
    /// Fails when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    /// Fails when the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    /// Fails when an existing value cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store in the platform data directory
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        let dir = ProjectDirs::from("", "", "wordle_daily").map_or_else(
            || PathBuf::from("wordle_daily_data"),
            |pd| pd.data_local_dir().to_path_buf(),
        );
        Self { dir }
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '@'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(path, value).map_err(io_err)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        match fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(StoreError::Io {
                key: key.to_string(),
                source: e,
            }),
            _ => Ok(()),
        }
    }
}

/// In-memory store for a single session
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_dir(dir.path().join("nested"));

        assert_eq!(store.get("stats").unwrap(), None);
        store.set("stats", r#"{"played":1}"#).unwrap();
        assert_eq!(store.get("stats").unwrap().as_deref(), Some(r#"{"played":1}"#));
        assert!(dir.path().join("nested/stats.json").exists());

        store.remove("stats").unwrap();
        assert_eq!(store.get("stats").unwrap(), None);
        // removing twice is fine
        store.remove("stats").unwrap();
    }

    #[test]
    fn dotted_keys_are_allowed() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_dir(dir.path());
        store.set("turnState.en-GB", "{}").unwrap();
        assert!(dir.path().join("turnState.en-GB.json").exists());
    }

    #[test]
    fn path_escapes_are_rejected() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_dir(dir.path());
        for key in ["", "../x", "a/b", ".hidden"] {
            assert!(matches!(store.set(key, "{}"), Err(StoreError::InvalidKey(_))), "{key}");
        }
    }

    #[test]
    fn memory_store() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
