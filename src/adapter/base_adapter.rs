//! Generic adapter composing a key validator with a context store

use crate::adapter::{ContextAwareDataStructure, KeyValidator};
use crate::error::ContextResult;
use crate::store::{ContextStore, InMemoryContextStore, Metadata};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Adapter that validates keys, then delegates to a shared store
///
/// The adapter adds sequencing only: validation errors and store errors are
/// returned exactly as produced.
pub struct ContextAdapter<V, S: ?Sized> {
    validator: V,
    store: Arc<S>,
}

impl<V> ContextAdapter<V, InMemoryContextStore<V::Key>>
where
    V: KeyValidator,
    V::Key: Eq + Hash,
{
    /// Create an adapter with its own in-memory store
    pub fn new(validator: V) -> Self {
        Self::with_store(validator, Arc::new(InMemoryContextStore::new()))
    }
}

impl<V, S: ?Sized> ContextAdapter<V, S> {
    /// Create an adapter over an existing, possibly shared, store
    pub fn with_store(validator: V, store: Arc<S>) -> Self {
        Self { validator, store }
    }

    /// Key validator in use
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Store handle; clone it to share the store with another adapter
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<V, S> ContextAdapter<V, S>
where
    V: KeyValidator,
    S: ContextStore<V::Key> + ?Sized,
{
    /// Stored keys that no longer validate against the wrapped structure
    ///
    /// [`list_context_keys`](ContextAwareDataStructure::list_context_keys)
    /// reports these keys too; this only tells them apart.
    pub fn stale_context_keys(&self) -> ContextResult<Vec<V::Key>> {
        let keys = self.store.list_keys()?;
        Ok(keys
            .into_iter()
            .filter(|key| self.validator.validate_key(key).is_err())
            .collect())
    }
}

impl<V, S> ContextAwareDataStructure for ContextAdapter<V, S>
where
    V: KeyValidator,
    V::Key: fmt::Display,
    S: ContextStore<V::Key> + ?Sized,
{
    type Key = V::Key;

    fn add_context(&self, key: Self::Key, metadata: Metadata) -> ContextResult<()> {
        self.validate(&key)?;
        tracing::debug!(%key, fields = metadata.len(), "adding context");
        self.store.set(key, metadata)?;
        Ok(())
    }

    fn get_context(&self, key: &Self::Key) -> ContextResult<Option<Metadata>> {
        self.validate(key)?;
        tracing::debug!(%key, "getting context");
        Ok(self.store.get(key)?)
    }

    fn remove_context(&self, key: &Self::Key) -> ContextResult<()> {
        self.validate(key)?;
        tracing::debug!(%key, "removing context");
        self.store.delete(key)?;
        Ok(())
    }

    fn list_context_keys(&self) -> ContextResult<Vec<Self::Key>> {
        Ok(self.store.list_keys()?)
    }
}

impl<V, S> ContextAdapter<V, S>
where
    V: KeyValidator,
    V::Key: fmt::Display,
    S: ?Sized,
{
    fn validate(&self, key: &V::Key) -> ContextResult<()> {
        self.validator.validate_key(key).map_err(|err| {
            tracing::warn!(%key, error = %err, "rejected context key");
            err.into()
        })
    }
}

impl<V: fmt::Debug, S: ?Sized> fmt::Debug for ContextAdapter<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextAdapter")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContextError, ContextKeyError, KeyResult, StoreError, StoreResult};
    use serde_json::json;

    /// Accepts even numbers only
    #[derive(Debug)]
    struct EvenValidator;

    impl KeyValidator for EvenValidator {
        type Key = u32;

        fn validate_key(&self, key: &u32) -> KeyResult<()> {
            if key % 2 == 0 {
                Ok(())
            } else {
                Err(ContextKeyError::MalformedKey {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Store whose every operation fails
    struct BrokenStore;

    impl ContextStore<u32> for BrokenStore {
        fn set(&self, _key: u32, _metadata: Metadata) -> StoreResult<()> {
            Err(broken("set"))
        }

        fn get(&self, _key: &u32) -> StoreResult<Option<Metadata>> {
            Err(broken("get"))
        }

        fn delete(&self, _key: &u32) -> StoreResult<()> {
            Err(broken("delete"))
        }

        fn list_keys(&self) -> StoreResult<Vec<u32>> {
            Err(broken("list_keys"))
        }
    }

    fn broken(operation: &str) -> StoreError {
        StoreError::OperationFailed {
            operation: operation.to_string(),
            reason: "connection reset".to_string(),
        }
    }

    fn meta(value: i64) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("n".to_string(), json!(value));
        metadata
    }

    #[test]
    fn test_delegates_to_store() {
        let adapter = ContextAdapter::new(EvenValidator);
        adapter.add_context(2, meta(1)).unwrap();
        assert_eq!(adapter.get_context(&2).unwrap(), Some(meta(1)));
        assert_eq!(adapter.list_context_keys().unwrap(), vec![2]);

        adapter.remove_context(&2).unwrap();
        assert_eq!(adapter.get_context(&2).unwrap(), None);
        assert!(adapter.list_context_keys().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_key_does_not_touch_store() {
        let adapter = ContextAdapter::new(EvenValidator);
        let err = adapter.add_context(3, meta(1)).unwrap_err();
        assert!(err.is_key_error());
        assert!(adapter.store().is_empty().unwrap());
    }

    #[test]
    fn test_validation_runs_before_broken_store() {
        let adapter = ContextAdapter::with_store(EvenValidator, Arc::new(BrokenStore));
        let err = adapter.get_context(&5).unwrap_err();
        assert!(matches!(err, ContextError::Key(_)));
    }

    #[test]
    fn test_store_errors_propagate_unchanged() {
        let adapter = ContextAdapter::with_store(EvenValidator, Arc::new(BrokenStore));

        match adapter.add_context(4, meta(1)) {
            Err(ContextError::Store(err)) => assert_eq!(err, broken("set")),
            other => panic!("expected store error, got {:?}", other),
        }
        match adapter.get_context(&4) {
            Err(ContextError::Store(err)) => assert_eq!(err, broken("get")),
            other => panic!("expected store error, got {:?}", other),
        }
        match adapter.remove_context(&4) {
            Err(ContextError::Store(err)) => assert_eq!(err, broken("delete")),
            other => panic!("expected store error, got {:?}", other),
        }
        match adapter.list_context_keys() {
            Err(ContextError::Store(err)) => assert_eq!(err, broken("list_keys")),
            other => panic!("expected store error, got {:?}", other),
        }
    }

    #[test]
    fn test_works_with_trait_object_store() {
        let store: Arc<dyn ContextStore<u32>> = Arc::new(InMemoryContextStore::new());
        let adapter = ContextAdapter::with_store(EvenValidator, store);
        adapter.add_context(8, meta(8)).unwrap();
        assert_eq!(adapter.get_context(&8).unwrap(), Some(meta(8)));
    }

    #[test]
    fn test_stale_keys_are_listed_and_reported() {
        let store = Arc::new(InMemoryContextStore::<u32>::new());
        // written behind the validator's back
        store.set(7, meta(7)).unwrap();
        store.set(6, meta(6)).unwrap();

        let adapter = ContextAdapter::with_store(EvenValidator, store);
        let mut listed = adapter.list_context_keys().unwrap();
        listed.sort_unstable();
        assert_eq!(listed, vec![6, 7]);
        assert_eq!(adapter.stale_context_keys().unwrap(), vec![7]);
    }
}
