//! Store module for context metadata
//!
//! This module provides the storage layer behind every context-aware data
//! structure:
//! - **[`ContextStore`]** - The trait any backend implements (set/get/delete/list_keys)
//! - **[`InMemoryContextStore`]** - A hash-map backend, shareable between adapters
//!
//! Backends are pluggable: an adapter only ever talks to the trait, so a
//! network or database store can replace the in-memory one without touching
//! adapter code.
//!
//! # Examples
//!
//! ```rust
//! use context_framework::store::{ContextStore, InMemoryContextStore, Metadata};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryContextStore::new();
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("source".to_string(), json!("fileA"));
//! store.set("GeneSymbol".to_string(), metadata.clone())?;
//!
//! assert_eq!(store.get(&"GeneSymbol".to_string())?, Some(metadata));
//!
//! store.delete(&"GeneSymbol".to_string())?;
//! assert_eq!(store.get(&"GeneSymbol".to_string())?, None);
//! # Ok(())
//! # }
//! ```

pub mod context_store;
pub mod memory_store;
pub mod store_config;

pub use context_store::{ContextStore, Metadata};
pub use memory_store::InMemoryContextStore;
pub use store_config::StoreConfig;

use crate::error::{ContextResult, StoreError, StoreResult};
use std::hash::Hash;

/// Store constants
pub mod constants {
    //! Constants used throughout the store module

    /// URL scheme selecting the in-memory backend
    pub const MEMORY_SCHEME: &str = "memory";

    /// Capacity reserved by a fresh in-memory store
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
}

/// Store factory for creating store instances
pub struct StoreFactory;

impl StoreFactory {
    /// Create an in-memory store instance
    ///
    /// The configuration is validated first; `StoreConfig::bounded(0)` is rejected.
    pub fn create_memory<K: Eq + Hash>(
        config: StoreConfig,
    ) -> ContextResult<InMemoryContextStore<K>> {
        InMemoryContextStore::with_config(config)
    }

    /// Create a store from URL (convenience method)
    ///
    /// Only `memory://` is built in. Any other scheme names a backend that
    /// has to be supplied by the caller through the [`ContextStore`] trait.
    pub fn from_url<K>(url: &str) -> StoreResult<Box<dyn ContextStore<K>>>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
    {
        let Some((scheme, _rest)) = url.split_once("://") else {
            return Err(StoreError::OperationFailed {
                operation: "parse_store_url".to_string(),
                reason: format!("Missing scheme in store URL: {}", url),
            });
        };

        if scheme.eq_ignore_ascii_case(constants::MEMORY_SCHEME) {
            tracing::debug!(url, "creating in-memory context store");
            Ok(Box::new(InMemoryContextStore::<K>::new()))
        } else {
            Err(StoreError::BackendNotAvailable {
                backend: scheme.to_string(),
            })
        }
    }
}
