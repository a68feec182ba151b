use std::fmt;

use railtypes_core::error::SchemaError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors that stop a schema build.
///
/// Lines that are not declarations never produce an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// A column was declared before any `create_table` line.
    UnboundColumn {
        column: String,
        line: usize,
        span: Span,
    },

    /// An error propagated from railtypes-core validation.
    CoreSchemaError {
        source: SchemaError,
        line: usize,
        span: Span,
    },
}

impl DslError {
    /// The 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::UnboundColumn { line, .. } | Self::CoreSchemaError { line, .. } => *line,
        }
    }

    /// The span of the offending line, without surrounding whitespace.
    pub fn span(&self) -> &Span {
        match self {
            Self::UnboundColumn { span, .. } | Self::CoreSchemaError { span, .. } => span,
        }
    }
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundColumn { column, line, .. } => {
                write!(
                    f,
                    "column '{column}' on line {line} is declared outside of any create_table block"
                )
            }
            Self::CoreSchemaError { source, line, .. } => {
                write!(f, "schema validation error on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for DslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CoreSchemaError { source, .. } => Some(source),
            _ => None,
        }
    }
}
