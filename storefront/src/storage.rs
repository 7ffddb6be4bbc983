//! Browser local storage as a [`StorageBackend`].

use bliss_cache::{Cache, CacheError, StorageBackend};
use web_sys::wasm_bindgen::JsValue;

/// `window.localStorage`. Looked up on every call, so the handle itself
/// holds no JS objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, CacheError> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| CacheError::Unavailable(describe(&e)))?
            .ok_or_else(|| CacheError::Unavailable("localStorage disabled".to_string()))
    }

    /// Whether local storage can be used in this browser.
    pub fn available() -> bool {
        Self::storage().is_ok()
    }
}

impl StorageBackend for BrowserStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CacheError::StoreError(describe(&e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(describe(&e)))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let storage = Self::storage()?;
        let len = storage
            .length()
            .map_err(|e| CacheError::StoreError(describe(&e)))?;
        let mut keys = (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .collect::<Vec<_>>();
        keys.sort();
        Ok(keys)
    }
}

/// The app's cache: local storage when the browser allows it, otherwise an
/// in-memory store that lasts until the tab closes.
pub fn open_cache() -> Cache {
    if BrowserStorage::available() {
        Cache::new(BrowserStorage)
    } else {
        tracing::warn!("localStorage unavailable, state will not survive a reload");
        Cache::in_memory()
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
