//! Key/value blob storage, the desktop counterpart of browser local storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use skillbridge_core::error::Result;

use super::atomic_file::AtomicFile;

/// String blobs addressed by key.
pub trait BlobStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileBlobStorage {
    dir: PathBuf,
}

impl FileBlobStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn file(&self, key: &str) -> AtomicFile {
        AtomicFile::new(self.path_for(key))
    }
}

impl BlobStorage for FileBlobStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.file(key).read()?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.file(key).write(value)?;
        tracing::debug!(key, path = %self.path_for(key).display(), "Blob written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Ok(self.file(key).remove()?)
    }
}

/// In-process storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryBlobStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStorage for MemoryBlobStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(storage: &dyn BlobStorage) {
        assert!(storage.get_item("k").unwrap().is_none());
        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        storage.set_item("other", "o").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        storage.remove_item("k").unwrap();
        assert!(storage.get_item("k").unwrap().is_none());
        assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("o"));
    }

    #[test]
    fn test_memory_storage() {
        exercise(&MemoryBlobStorage::new());
    }

    #[test]
    fn test_file_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBlobStorage::new(temp_dir.path());
        exercise(&storage);
        assert!(storage.path_for("other").exists());
    }
}
