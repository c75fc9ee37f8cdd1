//! In-memory context store

use crate::error::{ContextResult, StoreError, StoreResult};
use crate::store::context_store::{ContextStore, Metadata};
use crate::store::store_config::StoreConfig;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// In-memory context store backed by a hash map
///
/// Clones share the same map, so one store can back several adapters.
/// Access is serialized through an `RwLock`: many readers or one writer.
#[derive(Debug, Clone)]
pub struct InMemoryContextStore<K> {
    data: Arc<RwLock<HashMap<K, Metadata>>>,
    config: StoreConfig,
}

impl<K: Eq + Hash> Default for InMemoryContextStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> InMemoryContextStore<K> {
    /// Create a new, unbounded in-memory store
    pub fn new() -> Self {
        Self::from_valid_config(StoreConfig::default())
    }

    /// Create an in-memory store with the given configuration
    ///
    /// # Errors
    /// Returns [`ContextError::Configuration`](crate::error::ContextError::Configuration)
    /// if the configuration does not pass [`StoreConfig::validate`].
    pub fn with_config(config: StoreConfig) -> ContextResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StoreConfig) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of stored entries
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read("len")?.len())
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read("is_empty")?.is_empty())
    }

    /// Check whether a key has metadata
    pub fn contains_key(&self, key: &K) -> StoreResult<bool> {
        Ok(self.read("contains_key")?.contains_key(key))
    }

    /// Remove every entry
    pub fn clear(&self) -> StoreResult<()> {
        self.write("clear")?.clear();
        Ok(())
    }

    fn read(
        &self,
        operation: &str,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<K, Metadata>>> {
        self.data.read().map_err(|_| StoreError::LockPoisoned {
            operation: operation.to_string(),
        })
    }

    fn write(
        &self,
        operation: &str,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<K, Metadata>>> {
        self.data.write().map_err(|_| StoreError::LockPoisoned {
            operation: operation.to_string(),
        })
    }
}

impl<K> ContextStore<K> for InMemoryContextStore<K>
where
    K: Eq + Hash + Clone + Send + Sync,
{
    fn set(&self, key: K, metadata: Metadata) -> StoreResult<()> {
        let mut storage = self.write("set")?;
        if let Some(limit) = self.config.max_entries {
            if storage.len() >= limit && !storage.contains_key(&key) {
                tracing::warn!(limit, "in-memory context store is full");
                return Err(StoreError::QuotaExceeded { limit });
            }
        }
        storage.insert(key, metadata);
        tracing::trace!(entries = storage.len(), "stored context entry");
        Ok(())
    }

    fn get(&self, key: &K) -> StoreResult<Option<Metadata>> {
        let storage = self.read("get")?;
        Ok(storage.get(key).cloned())
    }

    fn delete(&self, key: &K) -> StoreResult<()> {
        let mut storage = self.write("delete")?;
        if storage.remove(key).is_some() {
            tracing::trace!(entries = storage.len(), "deleted context entry");
        }
        Ok(())
    }

    fn list_keys(&self) -> StoreResult<Vec<K>> {
        let storage = self.read("list_keys")?;
        Ok(storage.keys().cloned().collect())
    }
}
