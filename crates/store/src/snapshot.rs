//! Key-value snapshot persistence.
//!
//! One key per collection, each holding a JSON-serialized array (or
//! object, for the session). Writes replace the whole value; reads
//! happen once at load time. Last write wins; there is no locking and
//! no conflict detection, matching the single-user assumption.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::SnapshotError;

/// The persistence seam. Implementations only need string get/put/delete
/// by key; everything else (JSON, fixtures, key layout) lives above.
pub trait SnapshotStore: Send + Sync {
    /// Fetch the value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Overwrite the value under `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), SnapshotError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Volatile map-backed store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SnapshotError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Directory-backed store
// ---------------------------------------------------------------------------

/// Durable store keeping one `<key>.json` file per key under a root
/// directory.
#[derive(Debug)]
pub struct DirSnapshotStore {
    root: PathBuf,
}

impl DirSnapshotStore {
    /// Open (creating if needed) a snapshot directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SnapshotStore for DirSnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SnapshotError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySnapshotStore::new();
        assert!(store.get("lc_clients").unwrap().is_none());
        store.put("lc_clients", "[]").unwrap();
        assert_eq!(store.get("lc_clients").unwrap().as_deref(), Some("[]"));
        store.delete("lc_clients").unwrap();
        assert!(store.get("lc_clients").unwrap().is_none());
    }

    #[test]
    fn memory_delete_of_absent_key_is_ok() {
        let store = MemorySnapshotStore::new();
        store.delete("lc_auth").unwrap();
    }

    #[test]
    fn dir_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirSnapshotStore::open(dir.path()).unwrap();

        store.put("lc_coupons", r#"[{"code":"WINTER20"}]"#).unwrap();
        assert_eq!(
            store.get("lc_coupons").unwrap().as_deref(),
            Some(r#"[{"code":"WINTER20"}]"#)
        );
        assert!(dir.path().join("lc_coupons.json").exists());

        store.delete("lc_coupons").unwrap();
        assert!(store.get("lc_coupons").unwrap().is_none());
        store.delete("lc_coupons").unwrap();
    }

    #[test]
    fn dir_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = DirSnapshotStore::open(dir.path()).unwrap();
            store.put("lc_logs", "[]").unwrap();
        }
        let reopened = DirSnapshotStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("lc_logs").unwrap().as_deref(), Some("[]"));
    }
}
