use std::fmt;

/// Errors that occur when constructing schema model values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Table name failed snake_case validation.
    InvalidTableName(String),
    /// Column name failed snake_case validation.
    InvalidColumnName(String),
    /// Column type token failed validation.
    InvalidColumnType(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTableName(s) => {
                write!(f, "invalid table name '{s}': must match [a-z_]+")
            }
            Self::InvalidColumnName(s) => {
                write!(f, "invalid column name '{s}': must match [a-z_]+")
            }
            Self::InvalidColumnType(s) => {
                write!(f, "invalid column type '{s}': must match [a-z]+")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
