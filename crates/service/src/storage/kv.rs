use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::errors::ServiceError;

/// String key-value storage with persistent writes.
///
/// Reads are served from memory; every write persists before returning.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite all pairs, persisting once.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), ServiceError>;

    /// Remove all keys, persisting once. Missing keys are ignored.
    fn remove_many(&self, keys: &[&str]) -> Result<(), ServiceError>;

    fn set(&self, key: &str, value: String) -> Result<(), ServiceError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), ServiceError> {
        self.remove_many(&[key])
    }
}

/// Process-local store with nothing persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), ServiceError> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        for (k, v) in entries {
            map.insert((*k).to_string(), v.clone());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), ServiceError> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        for k in keys {
            map.remove(*k);
        }
        Ok(())
    }
}
