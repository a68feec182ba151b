use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// A column type token as written after `t.` in the schema, e.g. `string`.
///
/// The token is kept verbatim. It is not checked against any list of known
/// Rails column types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnType(String);

impl ColumnType {
    /// Creates a new `ColumnType`, requiring one or more lowercase ASCII letters.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SchemaError::InvalidColumnType(s));
        }
        Ok(Self(s))
    }

    /// The `integer` type carried by every implicit `id` column.
    pub fn integer() -> Self {
        Self("integer".to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ColumnType> for String {
    fn from(t: ColumnType) -> String {
        t.0
    }
}

impl TryFrom<String> for ColumnType {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for ColumnType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
