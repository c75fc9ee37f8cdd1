//! # Context Framework
//!
//! Attach, retrieve and remove metadata ("context") on locations inside a
//! larger data structure, such as a column or a single cell of a table.
//!
//! ## Features
//!
//! - **Store Module**: The [`ContextStore`](store::ContextStore) backend trait and an in-memory implementation
//! - **Adapter Module**: Key validation bound to a wrapped structure, exposed through
//!   the [`ContextAwareDataStructure`](adapter::ContextAwareDataStructure) capability
//! - **Table Adapter**: Column, row and cell keys validated against a table's shape
//!
//! ## Example
//!
//! ```rust
//! use context_framework::prelude::*;
//! use serde_json::json;
//!
//! let table = DataFrame::new(["GeneSymbol", "Expression"], 2);
//! let adapter = TableContextAdapter::for_table(&table);
//!
//! let mut provenance = Metadata::new();
//! provenance.insert("source".to_string(), json!("fileA"));
//! adapter.add_context(TableKey::cell(0, "Expression"), provenance)?;
//!
//! assert_eq!(adapter.list_context_keys()?, vec![TableKey::cell(0, "Expression")]);
//! # Ok::<(), context_framework::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod adapter;
pub mod error;
pub mod logging;
pub mod store;

/// Commonly used types and traits
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::adapter::{
        ContextAdapter, ContextAwareDataStructure, DataFrame, KeyValidator, TableContextAdapter,
        TableKey, TableKeyValidator, TableShape,
    };
    pub use crate::error::{ContextError, ContextKeyError, Error, Result, StoreError};
    pub use crate::store::{ContextStore, InMemoryContextStore, Metadata, StoreConfig};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
