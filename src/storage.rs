use async_trait::async_trait;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::{fs, sync::Mutex};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Flat key-value port behind which the saved accounts live.
///
/// `save` replaces the whole value stored under `key`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
    async fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError>;
}

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            key: key.to_string(),
            source,
        };
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&staging, blob).await.map_err(write_err)?;
        fs::rename(&staging, &target).await.map_err(write_err)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, blob: impl Into<Vec<u8>>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), blob.into());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load("nothing-here").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_save_replaces_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("accounts", b"[1,2,3]").await.unwrap();
        store.save("accounts", b"[]").await.unwrap();

        let loaded = store.load("accounts").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(&b"[]"[..]));
        assert!(store.path_for("accounts").exists());
        assert!(!dir.path().join(".accounts.json.tmp").exists());
    }

    #[tokio::test]
    async fn file_store_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing"));
        let err = store.save("accounts", b"[]").await.unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[tokio::test]
    async fn memory_store_round_trips_per_key() {
        let store = MemoryStore::with_entry("a", "one");
        store.save("b", b"two").await.unwrap();
        assert_eq!(store.load("a").await.unwrap().as_deref(), Some(&b"one"[..]));
        assert_eq!(store.load("b").await.unwrap().as_deref(), Some(&b"two"[..]));
        assert!(store.load("c").await.unwrap().is_none());
    }
}
