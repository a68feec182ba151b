use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::table_name::is_snake_identifier;

/// A validated column name matching `[a-z_]+`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a new `ColumnName`, validating snake_case format.
    pub fn new(s: impl Into<String>) -> Result<Self, SchemaError> {
        let s = s.into();
        if !is_snake_identifier(&s) {
            return Err(SchemaError::InvalidColumnName(s));
        }
        Ok(Self(s))
    }

    /// The name of the primary-key column every table carries.
    pub fn id() -> Self {
        Self("id".to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ColumnName> for String {
    fn from(n: ColumnName) -> String {
        n.0
    }
}

impl TryFrom<String> for ColumnName {
    type Error = SchemaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl Borrow<str> for ColumnName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["id", "first_name", "created_at", "_private"] {
            assert!(ColumnName::new(name).is_ok(), "expected valid: {name}");
        }
    }

    #[test]
    fn invalid_names() {
        for name in ["", "Name", "field1", "has-dash", "has space"] {
            assert!(ColumnName::new(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn display_roundtrip() {
        let name = ColumnName::new("first_name").unwrap();
        assert_eq!(name.to_string(), "first_name");
        assert_eq!(name.as_str(), "first_name");
    }

    #[test]
    fn borrows_as_str_with_matching_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ColumnName::new("created_at").unwrap());
        assert!(set.contains("created_at"));
        assert!(!set.contains("other"));
    }
}
