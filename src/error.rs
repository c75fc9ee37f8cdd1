//! Error types for the context framework
//!
//! Two disjoint error kinds exist: [`ContextKeyError`] for keys that do not
//! resolve against the wrapped data structure, and [`StoreError`] for storage
//! backend failures. [`ContextError`] carries either one unchanged.

use thiserror::Error;

/// The main error type returned by context-aware data structures
#[derive(Error, Debug)]
pub enum ContextError {
    /// Key validation failed before any storage access
    #[error(transparent)]
    Key(#[from] ContextKeyError),

    /// The storage backend failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },
}

impl ContextError {
    /// Returns true if this is a key validation failure
    pub fn is_key_error(&self) -> bool {
        matches!(self, ContextError::Key(_))
    }

    /// Returns true if this is a storage backend failure
    pub fn is_store_error(&self) -> bool {
        matches!(self, ContextError::Store(_))
    }
}

/// Key validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextKeyError {
    /// Column is not part of the wrapped table
    #[error("Column '{column}' not found in table")]
    ColumnNotFound {
        /// Requested column name
        column: String,
    },

    /// Row index is not part of the wrapped table
    #[error("Row index '{row}' not found in table")]
    RowNotFound {
        /// Requested row index label
        row: usize,
    },

    /// Key does not have the expected shape
    #[error("Key '{key}' is not a valid table context reference")]
    MalformedKey {
        /// Rendering of the rejected key
        key: String,
    },

    /// Leading tag of the key is not recognized
    #[error("Unrecognized key pattern: {key}")]
    UnrecognizedPattern {
        /// Rendering of the rejected key
        key: String,
    },

    /// Row key qualified with something other than a column
    #[error("Invalid key pattern for row-level context: {key}")]
    InvalidRowPattern {
        /// Rendering of the rejected key
        key: String,
    },
}

/// Storage backend error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage backend not available
    #[error("Storage backend not available: {backend}")]
    BackendNotAvailable {
        /// Name or URL scheme of the missing backend
        backend: String,
    },

    /// Storage operation failed
    #[error("Storage operation failed: {operation}: {reason}")]
    OperationFailed {
        /// Store operation that failed
        operation: String,
        /// Backend-reported cause
        reason: String,
    },

    /// Storage capacity exceeded
    #[error("Storage quota exceeded: limit is {limit} entries")]
    QuotaExceeded {
        /// Maximum number of entries the store accepts
        limit: usize,
    },

    /// A writer panicked while holding the store lock
    #[error("Storage lock poisoned during {operation}")]
    LockPoisoned {
        /// Store operation that found the lock poisoned
        operation: String,
    },
}

/// Convenience type alias for Results
pub type ContextResult<T> = std::result::Result<T, ContextError>;

/// Convenience type alias for key validation Results
pub type KeyResult<T> = std::result::Result<T, ContextKeyError>;

/// Convenience type alias for Storage Results
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Crate-wide error alias
pub type Error = ContextError;

/// Crate-wide result alias
pub type Result<T> = ContextResult<T>;
