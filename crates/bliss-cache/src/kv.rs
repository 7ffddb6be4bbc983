//! Key-value store wrapper with automatic serialization.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, MemoryStore};

/// A raw string key-value store.
///
/// Implementations only move strings around; JSON encoding happens in
/// [`Cache`].
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a raw value under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CacheError>;

    /// List every key currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// Type-safe cache over a [`StorageBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and clones share the
/// same backend.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn StorageBackend>,
}

impl Cache {
    /// Create a cache over the given backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a cache backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get_raw(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get a value, or `T::default()` when the key is missing.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, CacheError> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = raw.len(), "storage write");
        self.backend.set_raw(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        tracing::trace!(key, "storage delete");
        self.backend.remove(key)
    }

    /// Read a value and remove it in one step (one-shot payloads).
    pub fn take<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let value = self.get(key)?;
        if value.is_some() {
            self.delete(key)?;
        }
        Ok(value)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.backend.get_raw(key)?.is_some())
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.backend.keys()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::in_memory();
        let payload = Payload {
            name: "Asha".to_string(),
            count: 2,
        };
        cache.set("bliss.test", &payload).unwrap();

        let loaded: Option<Payload> = cache.get("bliss.test").unwrap();
        assert_eq!(loaded, Some(payload));
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::in_memory();
        let loaded: Option<Payload> = cache.get("missing").unwrap();
        assert!(loaded.is_none());

        let fallback: Payload = cache.get_or_default("missing").unwrap();
        assert_eq!(fallback, Payload::default());
    }

    #[test]
    fn test_take_removes_value() {
        let cache = Cache::in_memory();
        cache.set("once", &42u32).unwrap();

        assert_eq!(cache.take::<u32>("once").unwrap(), Some(42));
        assert_eq!(cache.take::<u32>("once").unwrap(), None);
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("shared", &"value").unwrap();

        assert!(other.exists("shared").unwrap());
        other.delete("shared").unwrap();
        assert!(!cache.exists("shared").unwrap());
    }

    #[test]
    fn test_corrupt_value_is_serialization_error() {
        let store = MemoryStore::new();
        store.set_raw("broken", "{not json").unwrap();
        let cache = Cache::new(store);

        let result: Result<Option<Payload>, _> = cache.get("broken");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }
}
