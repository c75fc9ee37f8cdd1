//! Keys addressing locations inside a table
//!
//! Two addressing levels exist: a whole column, or a row optionally
//! qualified by a column. Nested paths, wildcards and ranges are not
//! supported.

use crate::error::ContextKeyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Tag introducing a column reference
pub const COLUMN_TAG: &str = "column";

/// Tag introducing a row reference
pub const ROW_TAG: &str = "row";

/// Location of a context entry inside a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKey {
    /// A whole column, e.g. `("column", "GeneSymbol")`
    Column(String),
    /// A whole row, e.g. `("row", 42)`
    Row(usize),
    /// One cell, e.g. `("row", 42, "column", "Expression")`
    RowColumn(usize, String),
}

impl TableKey {
    /// Create a column key
    pub fn column(name: impl Into<String>) -> Self {
        TableKey::Column(name.into())
    }

    /// Create a row key
    pub fn row(index: usize) -> Self {
        TableKey::Row(index)
    }

    /// Create a row+column key
    pub fn cell(index: usize, column: impl Into<String>) -> Self {
        TableKey::RowColumn(index, column.into())
    }

    /// Column referenced by this key, if any
    pub fn column_name(&self) -> Option<&str> {
        match self {
            TableKey::Column(name) | TableKey::RowColumn(_, name) => Some(name),
            TableKey::Row(_) => None,
        }
    }

    /// Row referenced by this key, if any
    pub fn row_index(&self) -> Option<usize> {
        match self {
            TableKey::Row(index) | TableKey::RowColumn(index, _) => Some(*index),
            TableKey::Column(_) => None,
        }
    }

    /// Tuple form of the key, e.g. `["row", 0, "column", "Expression"]`
    pub fn to_parts(&self) -> Value {
        match self {
            TableKey::Column(name) => {
                Value::from(vec![Value::from(COLUMN_TAG), Value::from(name.as_str())])
            }
            TableKey::Row(index) => Value::from(vec![Value::from(ROW_TAG), Value::from(*index)]),
            TableKey::RowColumn(index, name) => Value::from(vec![
                Value::from(ROW_TAG),
                Value::from(*index),
                Value::from(COLUMN_TAG),
                Value::from(name.as_str()),
            ]),
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKey::Column(name) => write!(f, "(\"column\", \"{}\")", name),
            TableKey::Row(index) => write!(f, "(\"row\", {})", index),
            TableKey::RowColumn(index, name) => {
                write!(f, "(\"row\", {}, \"column\", \"{}\")", index, name)
            }
        }
    }
}

impl TryFrom<&Value> for TableKey {
    type Error = ContextKeyError;

    /// Parse a loosely typed tuple such as `["column", "GeneSymbol"]`
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let malformed = || ContextKeyError::MalformedKey {
            key: value.to_string(),
        };

        let parts = match value.as_array() {
            Some(parts) if parts.len() >= 2 => parts,
            _ => return Err(malformed()),
        };

        match parts[0].as_str() {
            Some(COLUMN_TAG) => {
                let name = parts[1].as_str().ok_or_else(malformed)?;
                Ok(TableKey::Column(name.to_string()))
            }
            Some(ROW_TAG) => {
                let index = parts[1]
                    .as_u64()
                    .and_then(|index| usize::try_from(index).ok())
                    .ok_or_else(malformed)?;

                // a third element without a fourth is ignored
                if parts.len() < 4 {
                    return Ok(TableKey::Row(index));
                }

                if parts[2].as_str() != Some(COLUMN_TAG) {
                    return Err(ContextKeyError::InvalidRowPattern {
                        key: value.to_string(),
                    });
                }
                let name = parts[3].as_str().ok_or_else(malformed)?;
                Ok(TableKey::RowColumn(index, name.to_string()))
            }
            _ => Err(ContextKeyError::UnrecognizedPattern {
                key: value.to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for TableKey {
    type Error = ContextKeyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        TableKey::try_from(&value)
    }
}
