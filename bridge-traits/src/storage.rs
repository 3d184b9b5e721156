//! Durable Key-Value Storage Abstraction
//!
//! Abstracts platform-specific persistent key-value storage:
//! - Desktop: SQLite-backed store (see `bridge-desktop`)
//! - iOS: UserDefaults
//! - Android: SharedPreferences / DataStore
//! - Web: localStorage
//!
//! The offline cache serializes its full video list as JSON under a single
//! key; an absent key means an empty cache, and clearing the cache deletes
//! the key rather than writing an empty list.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{error::Result, platform::PlatformSendSync};

/// Key-value storage trait
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::KeyValueStore;
///
/// async fn persist(store: &dyn KeyValueStore, payload: &str) -> Result<()> {
///     store.set("cached_videos", payload).await?;
///     Ok(())
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait KeyValueStore: PlatformSendSync {
    /// Retrieve a value. Returns `Ok(None)` if the key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, overwriting any previous value for the key.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check whether a key exists without retrieving the value.
    async fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// List all stored keys.
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Remove every stored key.
    async fn clear_all(&self) -> Result<()>;
}

/// In-memory store for testing and development.
///
/// Not durable; every instance starts empty.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn clear_all(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}
