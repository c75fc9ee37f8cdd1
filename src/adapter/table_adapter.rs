//! Context adapter for tabular data
//!
//! Keys are [`TableKey`]s and are checked against the table's current
//! columns and row index. The table is only borrowed and never mutated.

use crate::adapter::base_adapter::ContextAdapter;
use crate::adapter::table_key::TableKey;
use crate::adapter::KeyValidator;
use crate::error::{ContextKeyError, KeyResult};
use crate::store::{ContextStore, InMemoryContextStore};
use std::sync::Arc;

/// Read-only shape introspection of a table
pub trait TableShape {
    /// Whether a column with this name exists
    fn has_column(&self, name: &str) -> bool;

    /// Whether a row with this index label exists
    fn has_row(&self, index: usize) -> bool;

    /// Column names in table order
    fn column_names(&self) -> Vec<&str>;

    /// Number of rows
    fn row_count(&self) -> usize;
}

/// Validates [`TableKey`]s against a borrowed table
#[derive(Debug)]
pub struct TableKeyValidator<'a, T: ?Sized> {
    table: &'a T,
}

impl<'a, T: ?Sized> Clone for TableKeyValidator<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for TableKeyValidator<'a, T> {}

impl<'a, T: TableShape + ?Sized> TableKeyValidator<'a, T> {
    /// Create a validator over a table
    pub fn new(table: &'a T) -> Self {
        Self { table }
    }

    /// The wrapped table
    pub fn table(&self) -> &'a T {
        self.table
    }

    fn require_column(&self, name: &str) -> KeyResult<()> {
        if self.table.has_column(name) {
            Ok(())
        } else {
            Err(ContextKeyError::ColumnNotFound {
                column: name.to_string(),
            })
        }
    }

    fn require_row(&self, index: usize) -> KeyResult<()> {
        if self.table.has_row(index) {
            Ok(())
        } else {
            Err(ContextKeyError::RowNotFound { row: index })
        }
    }
}

impl<'a, T: TableShape + ?Sized> KeyValidator for TableKeyValidator<'a, T> {
    type Key = TableKey;

    fn validate_key(&self, key: &TableKey) -> KeyResult<()> {
        match key {
            TableKey::Column(name) => self.require_column(name),
            TableKey::Row(index) => self.require_row(*index),
            TableKey::RowColumn(index, name) => {
                self.require_row(*index)?;
                self.require_column(name)
            }
        }
    }
}

/// Context adapter over a table
pub type TableContextAdapter<'a, T, S = InMemoryContextStore<TableKey>> =
    ContextAdapter<TableKeyValidator<'a, T>, S>;

impl<'a, T> ContextAdapter<TableKeyValidator<'a, T>, InMemoryContextStore<TableKey>>
where
    T: TableShape + ?Sized,
{
    /// Wrap a table with a fresh in-memory store
    pub fn for_table(table: &'a T) -> Self {
        ContextAdapter::new(TableKeyValidator::new(table))
    }
}

impl<'a, T, S> ContextAdapter<TableKeyValidator<'a, T>, S>
where
    T: TableShape + ?Sized,
    S: ContextStore<TableKey> + ?Sized,
{
    /// Wrap a table with an existing, possibly shared, store
    pub fn for_table_with_store(table: &'a T, store: Arc<S>) -> Self {
        ContextAdapter::with_store(TableKeyValidator::new(table), store)
    }

    /// The wrapped table
    pub fn table(&self) -> &'a T {
        self.validator().table()
    }
}
