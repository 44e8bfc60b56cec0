use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::{KeyValueStore, StorageError};

/// Disk-backed `KeyValueStore`.
///
/// ## Layout
/// ```text
/// {root}/{key}.json
/// ```
/// One file per key, rewritten whole on every `set_item`. Writes go to a
/// sibling `.tmp` file first and are renamed into place so a crash never
/// leaves a half-written blob behind.
///
/// Keys are restricted to `[A-Za-z0-9._-]` and may not start with a dot,
/// which keeps every key inside `root`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the root directory when missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self::new(root);
        fs::create_dir_all(&store.root).map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    /// Whether `key` maps to a file directly inside the root.
    pub fn is_valid_key(key: &str) -> bool {
        !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !Self::is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|e| StorageError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("{}: {}", path.display(), e)))?;

        debug!(key, bytes = value.len(), "Stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert!(store.get_item("nothing-here").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_overwrites_whole_value() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set_item("blob", "[1,2,3]").unwrap();
        store.set_item("blob", "[]").unwrap();

        assert_eq!(store.get_item("blob").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("blob.json").is_file());
        assert!(!dir.path().join("blob.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set_item("blob", "x").unwrap();
        store.remove_item("blob").unwrap();
        store.remove_item("blob").unwrap();

        assert!(store.get_item("blob").unwrap().is_none());
    }

    #[test]
    fn test_keys_cannot_escape_root() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        for key in ["../etc/passwd", "a/b", "", ".hidden"] {
            assert!(matches!(
                store.set_item(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");

        let store = FileKeyValueStore::open(&root).unwrap();

        assert!(store.is_available());
        assert_eq!(store.root(), root.as_path());
    }
}
