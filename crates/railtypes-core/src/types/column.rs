use serde::Serialize;

use super::column_type::ColumnType;

/// A single table attribute. Only the declared type is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(column_type: ColumnType) -> Self {
        Self { column_type }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_type)
    }
}
