//! Context-aware adapters
//!
//! An adapter binds key validation for one kind of data structure to a
//! [`ContextStore`](crate::store::ContextStore). Callers only see the
//! [`ContextAwareDataStructure`] capability:
//!
//! ```text
//! caller -> add/get/remove_context(key) -> validate_key(key) -> store.set/get/delete(key)
//! ```
//!
//! Validation always runs before the store is touched, so a rejected key
//! never mutates storage.
//!
//! # Example
//!
//! ```rust
//! use context_framework::adapter::{
//!     ContextAwareDataStructure, DataFrame, TableContextAdapter, TableKey,
//! };
//! use context_framework::store::Metadata;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = DataFrame::new(["GeneSymbol", "Expression"], 2);
//! let adapter = TableContextAdapter::for_table(&table);
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("source".to_string(), json!("fileA"));
//! adapter.add_context(TableKey::column("GeneSymbol"), metadata.clone())?;
//!
//! assert_eq!(adapter.get_context(&TableKey::column("GeneSymbol"))?, Some(metadata));
//! assert!(adapter.get_context(&TableKey::column("Nonexistent")).is_err());
//! # Ok(())
//! # }
//! ```

pub mod base_adapter;
pub mod data_frame;
pub mod table_adapter;
pub mod table_key;

pub use base_adapter::ContextAdapter;
pub use data_frame::DataFrame;
pub use table_adapter::{TableContextAdapter, TableKeyValidator, TableShape};
pub use table_key::TableKey;

use crate::error::{ContextResult, KeyResult};
use crate::store::Metadata;

/// Capability shared by every context-aware data structure
///
/// Any type implementing this trait can be used wherever context tracking is
/// expected, independent of the structure it wraps or the store behind it.
pub trait ContextAwareDataStructure {
    /// Key type addressing a location in the wrapped structure
    type Key;

    /// Attach metadata to a key, replacing whatever was stored before
    ///
    /// # Errors
    /// * [`ContextError::Key`](crate::error::ContextError::Key) if the key is invalid for this structure
    /// * [`ContextError::Store`](crate::error::ContextError::Store) if the backend fails to write
    fn add_context(&self, key: Self::Key, metadata: Metadata) -> ContextResult<()>;

    /// Retrieve the metadata for a key, or `None` if nothing is stored
    fn get_context(&self, key: &Self::Key) -> ContextResult<Option<Metadata>>;

    /// Remove the metadata for a key; removing an absent entry succeeds
    fn remove_context(&self, key: &Self::Key) -> ContextResult<()>;

    /// List every key with stored metadata
    ///
    /// Keys are not re-validated: if the wrapped structure changed shape since
    /// a key was added, that key is still listed.
    fn list_context_keys(&self) -> ContextResult<Vec<Self::Key>>;
}

/// Domain-specific key validation
pub trait KeyValidator {
    /// Key type this validator understands
    type Key;

    /// Reject keys that do not resolve against the wrapped structure
    fn validate_key(&self, key: &Self::Key) -> KeyResult<()>;
}
