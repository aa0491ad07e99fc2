//! Persistence port: an opaque string blob store keyed by name

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::InventoryResult;

/// Key holding the JSON array of products
pub const PRODUCTS_KEY: &str = "products";

/// Key holding the JSON array of movements
pub const MOVEMENTS_KEY: &str = "movements";

/// Synchronous get/set blob storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> InventoryResult<()>;
}

/// Load and parse the value under `key`, or build the fallback when absent
pub fn load<S, T, F>(store: &S, key: &str, fallback: F) -> InventoryResult<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => {
            tracing::debug!(key, "No stored value, using fallback");
            Ok(fallback())
        }
    }
}

/// Serialize `value` as JSON and store it under `key`
pub fn save<S, T>(store: &mut S, key: &str, value: &T) -> InventoryResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store used by tests and as a fallback when no storage exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> InventoryResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
