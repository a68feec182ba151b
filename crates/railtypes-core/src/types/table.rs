use indexmap::IndexMap;
use serde::Serialize;

use super::column::Column;
use super::column_name::ColumnName;
use super::column_type::ColumnType;

/// An ordered collection of columns.
///
/// A table always starts with an `id: integer` column, whether or not the
/// schema declares one. Declared columns follow in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: IndexMap<ColumnName, Column>,
}

impl Table {
    /// Creates a table holding only the implicit `id` column.
    pub fn new() -> Self {
        let mut columns = IndexMap::new();
        columns.insert(ColumnName::id(), Column::new(ColumnType::integer()));
        Self { columns }
    }

    /// Declares a column, returning the column it replaced, if any.
    ///
    /// Redeclaring an existing name overwrites its type in place; the column
    /// keeps the position of its first declaration.
    pub fn declare_column(&mut self, name: ColumnName, column_type: ColumnType) -> Option<Column> {
        self.columns.insert(name, Column::new(column_type))
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Iterates over columns in declaration order, `id` first.
    pub fn columns(&self) -> impl Iterator<Item = (&ColumnName, &Column)> {
        self.columns.iter()
    }

    /// Number of columns, including the implicit `id`.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: every table holds at least its `id` column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
