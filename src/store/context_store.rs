//! Context store trait and types

use crate::error::StoreResult;
use std::collections::HashMap;
use std::sync::Arc;

/// Open-ended metadata record attached to a key
pub type Metadata = HashMap<String, serde_json::Value>;

/// Storage backend trait for context metadata
///
/// Every method may fail with [`StoreError`](crate::error::StoreError).
/// An absent entry is reported as `Ok(None)` by [`get`](ContextStore::get),
/// never as an error.
pub trait ContextStore<K>: Send + Sync {
    /// Store metadata under a key, replacing any existing entry
    fn set(&self, key: K, metadata: Metadata) -> StoreResult<()>;

    /// Retrieve metadata by key
    fn get(&self, key: &K) -> StoreResult<Option<Metadata>>;

    /// Delete metadata by key; deleting an absent key succeeds
    fn delete(&self, key: &K) -> StoreResult<()>;

    /// List every key that currently has metadata, in no particular order
    fn list_keys(&self) -> StoreResult<Vec<K>>;
}

impl<K, S> ContextStore<K> for Arc<S>
where
    S: ContextStore<K> + ?Sized,
{
    fn set(&self, key: K, metadata: Metadata) -> StoreResult<()> {
        (**self).set(key, metadata)
    }

    fn get(&self, key: &K) -> StoreResult<Option<Metadata>> {
        (**self).get(key)
    }

    fn delete(&self, key: &K) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn list_keys(&self) -> StoreResult<Vec<K>> {
        (**self).list_keys()
    }
}
