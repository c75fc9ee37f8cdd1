//! Minimal tabular shape

use crate::adapter::table_adapter::TableShape;
use std::collections::BTreeSet;

/// Column names plus row index labels of a table
///
/// Only the shape is tracked; cell values live with the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFrame {
    columns: Vec<String>,
    index: BTreeSet<usize>,
}

impl DataFrame {
    /// Create a table with the given columns and rows labelled `0..row_count`
    pub fn new<I, S>(columns: I, row_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_index(columns, 0..row_count)
    }

    /// Create a table with explicit row index labels
    pub fn with_index<I, S, R>(columns: I, index: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = usize>,
    {
        let mut frame = Self::default();
        for column in columns {
            frame.add_column(column);
        }
        frame.index = index.into_iter().collect();
        frame
    }

    /// Append a column; adding an existing name is a no-op
    pub fn add_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.columns.contains(&name) {
            self.columns.push(name);
        }
    }

    /// Remove a column, returning whether it existed
    pub fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|column| column != name);
        self.columns.len() != before
    }

    /// Append a row labelled one past the current largest label
    ///
    /// Returns `None` without changing the table when the largest label is
    /// already `usize::MAX`.
    pub fn push_row(&mut self) -> Option<usize> {
        let label = match self.index.last() {
            Some(last) => last.checked_add(1)?,
            None => 0,
        };
        self.index.insert(label);
        Some(label)
    }

    /// Remove a row label, returning whether it existed
    pub fn drop_row(&mut self, index: usize) -> bool {
        self.index.remove(&index)
    }

    /// Row index labels in ascending order
    pub fn index(&self) -> impl Iterator<Item = usize> + '_ {
        self.index.iter().copied()
    }
}

impl TableShape for DataFrame {
    fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    fn has_row(&self, index: usize) -> bool {
        self.index.contains(&index)
    }

    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }

    fn row_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let frame = DataFrame::new(["GeneSymbol", "Expression"], 2);
        assert!(frame.has_column("GeneSymbol"));
        assert!(!frame.has_column("Nonexistent"));
        assert!(frame.has_row(1));
        assert!(!frame.has_row(2));
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column_names(), vec!["GeneSymbol", "Expression"]);
    }

    #[test]
    fn test_sparse_index() {
        let mut frame = DataFrame::with_index(["A"], [3, 10]);
        assert!(!frame.has_row(0));
        assert!(frame.has_row(10));
        assert_eq!(frame.push_row(), Some(11));
        assert!(frame.drop_row(3));
        assert_eq!(frame.index().collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn test_push_row_at_max_label() {
        let mut frame = DataFrame::with_index(["A"], [usize::MAX]);
        assert_eq!(frame.push_row(), None);
        assert_eq!(frame.row_count(), 1);
        assert!(frame.has_row(usize::MAX));
    }

    #[test]
    fn test_columns_mutation() {
        let mut frame = DataFrame::new(["A"], 0);
        frame.add_column("A");
        frame.add_column("B");
        assert_eq!(frame.column_names(), vec!["A", "B"]);
        assert!(frame.drop_column("A"));
        assert!(!frame.drop_column("A"));
        assert_eq!(DataFrame::default().push_row(), Some(0));
    }
}
