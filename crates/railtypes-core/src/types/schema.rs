use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

use super::table::Table;
use super::table_name::TableName;

/// All tables declared in one schema file, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    tables: IndexMap<TableName, Table>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a table and returns it for column declarations.
    ///
    /// A table declared a second time is replaced by a fresh table holding
    /// only its implicit `id` column. The replacement keeps the position of
    /// the first declaration.
    pub fn declare_table(&mut self, name: TableName) -> &mut Table {
        match self.tables.entry(name) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(table = %entry.key(), "table redeclared, previous columns dropped");
                entry.insert(Table::new());
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Table::new()),
        }
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Mutable lookup by validated name.
    pub fn table_mut(&mut self, name: &TableName) -> Option<&mut Table> {
        self.tables.get_mut(name)
    }

    /// Iterates over tables in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = (&TableName, &Table)> {
        self.tables.iter()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &TableName> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnName, ColumnType};

    fn table(s: &str) -> TableName {
        TableName::new(s).unwrap()
    }

    fn table_names(schema: &Schema) -> Vec<&str> {
        schema.table_names().map(TableName::as_str).collect()
    }

    #[test]
    fn empty_schema() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
        assert!(schema.table("users").is_none());
    }

    #[test]
    fn tables_keep_declaration_order() {
        let mut schema = Schema::new();
        schema.declare_table(table("posts"));
        schema.declare_table(table("comments"));
        schema.declare_table(table("authors"));
        assert_eq!(table_names(&schema), vec!["posts", "comments", "authors"]);
    }

    #[test]
    fn declare_table_returns_table_for_columns() {
        let mut schema = Schema::new();
        schema.declare_table(table("users")).declare_column(
            ColumnName::new("email").unwrap(),
            ColumnType::new("string").unwrap(),
        );
        let users = schema.table("users").unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.column("email").is_some());
    }

    #[test]
    fn redeclared_table_is_reset_in_place() {
        let mut schema = Schema::new();
        schema.declare_table(table("users")).declare_column(
            ColumnName::new("email").unwrap(),
            ColumnType::new("string").unwrap(),
        );
        schema.declare_table(table("posts"));
        schema.declare_table(table("users"));

        assert_eq!(table_names(&schema), vec!["users", "posts"]);
        let users = schema.table("users").unwrap();
        assert_eq!(users.len(), 1);
        assert!(users.column("email").is_none());
    }

    #[test]
    fn table_lookup_by_str_matches_declared_name() {
        let mut schema = Schema::new();
        schema.declare_table(table("posts"));
        schema.declare_table(table("user_accounts"));
        assert!(schema.table("user_accounts").is_some());
        assert!(schema.table("posts").is_some());
        assert!(schema.table("user").is_none());
        assert!(schema.table("Posts").is_none());
    }

    #[test]
    fn table_mut_finds_declared_table() {
        let mut schema = Schema::new();
        schema.declare_table(table("users"));
        assert!(schema.table_mut(&table("users")).is_some());
        assert!(schema.table_mut(&table("posts")).is_none());
    }

    #[test]
    fn serializes_tables_in_order() {
        let mut schema = Schema::new();
        schema.declare_table(table("zebras"));
        schema.declare_table(table("apes"));
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(
            json,
            r#"{"tables":{"zebras":{"columns":{"id":{"type":"integer"}}},"apes":{"columns":{"id":{"type":"integer"}}}}}"#
        );
    }
}
