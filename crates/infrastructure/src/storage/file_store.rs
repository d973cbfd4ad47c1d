use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use domain::{DomainError, KeyValueStore};
use tracing::debug;

/// Directory-backed key-value store: each key lives in its own
/// `<dir>/<key>.json` file. The Rust stand-in for browser local storage.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|error| {
            DomainError::StorageError(format!(
                "failed to create storage directory {}: {}",
                dir.display(),
                error
            ))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key);
        if !path.is_file() {
            debug!("No stored value for key '{}'", key);
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some).map_err(|error| {
            DomainError::StorageError(format!("failed to read {}: {}", path.display(), error))
        })
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key);
        // Write-then-rename so a crash mid-write never truncates the blob.
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp_path, value).map_err(|error| {
            DomainError::StorageError(format!("failed to write {}: {}", tmp_path.display(), error))
        })?;
        fs::rename(&tmp_path, &path).map_err(|error| {
            DomainError::StorageError(format!(
                "failed to move {} into place: {}",
                tmp_path.display(),
                error
            ))
        })?;
        debug!("Saved {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), DomainError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|error| {
                DomainError::StorageError(format!(
                    "failed to remove {}: {}",
                    path.display(),
                    error
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_of_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        assert_eq!(store.load("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        store.save("userRegistrations", "[1,2,3]").await.unwrap();
        assert_eq!(
            store.load("userRegistrations").await.unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        store.save("key", "first").await.unwrap();
        store.save("key", "second").await.unwrap();
        assert_eq!(store.load("key").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn clear_removes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        store.save("key", "value").await.unwrap();
        store.clear("key").await.unwrap();
        assert_eq!(store.load("key").await.unwrap(), None);
        // Clearing an absent key is fine too.
        store.clear("key").await.unwrap();
    }
}
