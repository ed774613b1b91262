use std::{
    collections::HashMap,
    hash::Hash,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tracing::warn;

use crate::errors::ServiceError;
use crate::storage::kv::KeyValueStore;

/// Generic JSON file-backed key-value map store.
///
/// Persists a `HashMap<K, V>` to a JSON file and provides simple CRUD helpers.
/// Intended for small client state where a database is overkill.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`. Creates the file with an empty map if missing;
    /// an unreadable or corrupt file is treated as empty.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(ServiceError::storage)?;
        }

        let map: HashMap<K, V> = match std::fs::read(&file_path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %file_path.display(), error = %e, "state file is not a JSON map; starting empty");
                HashMap::new()
            }),
            Err(_) => {
                let empty: HashMap<K, V> = HashMap::new();
                write_map(&file_path, &empty)?;
                empty
            }
        };

        Ok(Self { inner: RwLock::new(map), file_path })
    }

    fn save(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        write_map(&self.file_path, map)
    }

    /// List all entries as `(key, value)` pairs.
    pub fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    /// Apply a mutation to the underlying map and persist it.
    pub fn update_map<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>),
    {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut map);
        self.save(&map)
    }
}

fn write_map<K, V>(path: &Path, map: &HashMap<K, V>) -> Result<(), ServiceError>
where
    K: Eq + Hash + serde::Serialize,
    V: serde::Serialize,
{
    let data = serde_json::to_vec_pretty(map).map_err(ServiceError::storage)?;
    std::fs::write(path, data).map_err(ServiceError::storage)
}

impl KeyValueStore for JsonMapStore<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), ServiceError> {
        self.update_map(|m| {
            for (k, v) in entries {
                m.insert((*k).to_string(), v.clone());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), ServiceError> {
        self.update_map(|m| {
            for k in keys {
                m.remove(*k);
            }
        })
    }
}
