use crate::exceptions::GenericError;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const GALLERY_KEY: &str = "kincsek_gallery";
pub const LEADS_KEY: &str = "kincsek_leads";
pub const PROGRAMS_KEY: &str = "kincsek_programs";
pub const FOUNDERS_KEY: &str = "kincsek_founders";
pub const ANNOUNCEMENT_KEY: &str = "kincsek_announcement";

/// Synchronous string key-value store holding serialized JSON documents.
/// There are no transactions: the last write for a key wins.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, GenericError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), GenericError>;
}

/// In-process store used by tests and `--memory` sessions
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, GenericError> {
        let items = self
            .items
            .read()
            .map_err(|e| GenericError::Storage(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), GenericError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| GenericError::Storage(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores every key as `<dir>/<key>.json`. The directory is created on the
/// first write.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, GenericError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), GenericError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Read a JSON document, treating absent or malformed data as the default value
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("Failed to read {}, using empty value: {}", key, e);
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Stored value for {} is malformed, using empty value: {}", key, e);
            T::default()
        }
    }
}

/// Serialize and write the whole value under `key`
pub fn save<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), GenericError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}
