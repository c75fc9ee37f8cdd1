//! Store configuration

use crate::error::{ContextError, ContextResult};
use crate::store::constants;
use serde::{Deserialize, Serialize};

/// Configuration shared by store backends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of entries; `None` means unbounded
    pub max_entries: Option<usize>,
    /// Capacity reserved up front by in-memory backends
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: None,
            initial_capacity: constants::DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Create a bounded configuration
    pub fn bounded(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
            initial_capacity: constants::DEFAULT_INITIAL_CAPACITY.min(max_entries),
        }
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> ContextResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ContextError::Configuration {
            message: format!("Invalid store configuration: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> ContextResult<()> {
        if self.max_entries == Some(0) {
            return Err(ContextError::Configuration {
                message: "max_entries must be greater than zero".to_string(),
            });
        }
        if let Some(max) = self.max_entries {
            if self.initial_capacity > max {
                return Err(ContextError::Configuration {
                    message: format!(
                        "initial_capacity {} exceeds max_entries {}",
                        self.initial_capacity, max
                    ),
                });
            }
        }
        Ok(())
    }
}
