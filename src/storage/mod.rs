//! Storage modules: key-value backends, config, session and catalog stores

pub mod catalog;
pub mod config;
pub mod seed;
pub mod session;

use crate::error::Result;
use crate::utils::paths::ensure_dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs;

/// String-keyed, string-valued durable storage
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Returns the stored value, or None if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Storage keys for one application prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn user(&self) -> String {
        format!("{}-user", self.prefix)
    }

    pub fn liked(&self) -> String {
        format!("{}-liked", self.prefix)
    }

    pub fn my_list(&self) -> String {
        format!("{}-mylist", self.prefix)
    }

    pub fn videos(&self) -> String {
        format!("{}-videos", self.prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new("viewvoyage")
    }
}

/// One JSON file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path).await?))
    }

    /// Writes a sibling temp file and renames it over the entry, so a
    /// reader sees either the old value or the new one.
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        ensure_dir(&self.dir.to_string_lossy()).await?;
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, self.key_path(key)).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}

/// In-memory storage. Clones share the same map, so a clone can stand in for
/// the same backend across a simulated restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Every write is a single insert or remove, so a poisoned map is still whole
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

/// Load and parse a JSON value. Absent keys are `Ok(None)`.
pub async fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(content) => Ok(Some(serde_json::from_str(&content)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let content = serde_json::to_string(value)?;
    store.set(key, &content).await?;
    tracing::debug!(key, bytes = content.len(), "persisted");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_keys() {
        let keys = StorageKeys::new("app");
        assert_eq!(keys.user(), "app-user");
        assert_eq!(keys.liked(), "app-liked");
        assert_eq!(keys.my_list(), "app-mylist");
        assert_eq!(keys.videos(), "app-videos");
        assert_eq!(StorageKeys::default().videos(), "viewvoyage-videos");
    }

    #[tokio::test]
    async fn test_file_store_set_get_remove() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("data"));

        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "[1,2]").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[1,2]"));
        assert!(tmp.path().join("data/k.json").exists());

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Removing twice is fine
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_replaces_whole_entry() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        store.set("k", "a much longer first value").await.unwrap();
        store.set("k", "short").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("short"));
        assert!(!tmp.path().join("k.json.tmp").exists());
        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["k.json"]);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("k", "v").await.unwrap();
        assert_eq!(clone.get("k").await.unwrap().as_deref(), Some("v"));
        assert!(clone.contains("k"));

        clone.remove("k").await.unwrap();
        assert!(!store.contains("k"));
    }

    #[tokio::test]
    async fn test_load_json_reports_corrupt_content() {
        let store = MemoryStore::new();
        store.set("k", "not json").await.unwrap();
        let loaded: Result<Option<Vec<u32>>> = load_json(&store, "k").await;
        assert!(loaded.is_err());

        save_json(&store, "k", &vec![1u32, 2]).await.unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "k").await.unwrap();
        assert_eq!(loaded, Some(vec![1, 2]));
    }
}
