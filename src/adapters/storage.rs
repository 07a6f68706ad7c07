use crate::core::StorageProvider;
use crate::utils::error::{Result, SiteError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

fn poisoned() -> SiteError {
    SiteError::StorageError {
        message: "storage lock poisoned".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Empty in-process store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value pairs kept in a single JSON object file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Store backed by `path`. The file and its parent directories are
    /// created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let data = fs::read(&self.path)?;
        if data.is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json_data)?;
        Ok(())
    }
}

impl StorageProvider for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        // An unparseable file is overwritten with just the new entry.
        let mut entries = match self.read_entries() {
            Err(SiteError::SerializationError(e)) => {
                tracing::warn!(
                    "Discarding unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            other => other?,
        };
        entries.insert(key.to_string(), value.to_string());
        tracing::debug!("Writing {} to {}", key, self.path.display());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);

        storage.set("theme", "dark").unwrap();
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));

        assert_eq!(storage.get("theme").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_creates_parent_and_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/state/storage.json");
        let storage = FileStorage::new(&path);

        storage.set("locale", "en").unwrap();
        storage.set("theme", "dark").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("locale").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(SiteError::SerializationError(_))
        ));
    }

    #[test]
    fn test_file_storage_set_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "{\"theme\": ").unwrap();

        let storage = FileStorage::new(&path);
        storage.set("theme", "dark").unwrap();

        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        let stored: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }
}
