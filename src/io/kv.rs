use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not create data directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize value for key '{key}': {source}")]
    SerializeError {
        key: String,
        source: serde_json::Error,
    },
}

/// The durability boundary: a string-keyed blob store.
///
/// `get` treats every failure mode (missing, unreadable) as absent; the
/// stored blobs are opaque and self-describing, so a read error is
/// indistinguishable from no prior data by design. `set` reports failures
/// because losing a write silently would break the mirror invariant.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key inside the data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created lazily on the
    /// first `set`, so a read-only invocation never touches the filesystem.
    pub fn open(dir: &Path) -> FileStore {
        FileStore {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::CreateDirError {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|e| StoreError::WriteError { path, source: e })
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore::default()
    }

    /// Pre-seed a key, e.g. to simulate prior persisted state.
    pub fn with_entry(key: &str, value: &str) -> MemStore {
        let mut store = MemStore::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path());
        store.set("todoList", "[1,2,3]").unwrap();
        assert_eq!(store.get("todoList").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn file_store_missing_key_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path());
        assert!(store.get("todoList").is_none());
    }

    #[test]
    fn file_store_creates_dir_on_first_set() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep/data");
        let mut store = FileStore::open(&nested);
        assert!(!nested.exists());
        store.set("k", "v").unwrap();
        assert!(nested.join("k").is_file());
    }

    #[test]
    fn file_store_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path());
        store.set("k", "old").unwrap();
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn mem_store_round_trip() {
        let mut store = MemStore::new();
        assert!(store.get("k").is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
