use railtypes_core::types::{ColumnName, ColumnType, Schema, TableName};

use crate::classifier::{classify, LineKind};
use crate::error::{DslError, Span};

/// What to do with a column declared before any `create_table` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnboundColumnPolicy {
    /// Fail the build with [`DslError::UnboundColumn`].
    #[default]
    Reject,
    /// Drop the column and log a warning.
    Skip,
}

/// Folds schema lines into a [`Schema`].
///
/// Every column binds to the table declared most recently above it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder {
    policy: UnboundColumnPolicy,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnboundColumnPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnboundColumnPolicy {
        self.policy
    }

    /// Builds a schema from individual lines.
    ///
    /// Spans in errors assume the lines were joined with a single `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`DslError::UnboundColumn`] under [`UnboundColumnPolicy::Reject`]
    /// when a column precedes every table declaration.
    pub fn build<'a, I>(&self, lines: I) -> Result<Schema, DslError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut offset = 0;
        let lines = lines.into_iter().enumerate().map(|(idx, raw)| {
            let start = offset;
            offset += raw.len() + 1;
            SourceLine::new(idx + 1, start, raw)
        });
        self.fold(lines)
    }

    /// Builds a schema from the full text of a schema file.
    ///
    /// A leading byte order mark is skipped; spans still index into `source`.
    ///
    /// # Errors
    ///
    /// Same as [`SchemaBuilder::build`].
    pub fn build_source(&self, source: &str) -> Result<Schema, DslError> {
        let (source, mut offset) = match source.strip_prefix('\u{feff}') {
            Some(rest) => (rest, '\u{feff}'.len_utf8()),
            None => (source, 0),
        };
        let lines = source.split_inclusive('\n').enumerate().map(|(idx, raw)| {
            let start = offset;
            offset += raw.len();
            SourceLine::new(idx + 1, start, raw)
        });
        self.fold(lines)
    }

    fn fold<'a>(&self, mut lines: impl Iterator<Item = SourceLine<'a>>) -> Result<Schema, DslError> {
        let state = lines.try_fold(BuildState::default(), |state, line| {
            state.apply(&line, self.policy)
        })?;
        Ok(state.schema)
    }
}

/// Parses schema text with the default [`UnboundColumnPolicy::Reject`] policy.
///
/// # Errors
///
/// Returns [`DslError::UnboundColumn`] when a column precedes every table.
pub fn parse(source: &str) -> Result<Schema, DslError> {
    SchemaBuilder::new().build_source(source)
}

/// One input line, trimmed, with its position in the source.
struct SourceLine<'a> {
    number: usize,
    span: Span,
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    fn new(number: usize, start: usize, raw: &'a str) -> Self {
        let leading = raw.len() - raw.trim_start().len();
        let text = raw.trim();
        let start = start + leading;
        Self {
            number,
            span: Span::new(start, start + text.len()),
            text,
        }
    }
}

/// Fold state: the schema so far and the table new columns attach to.
#[derive(Default)]
struct BuildState {
    schema: Schema,
    current: Option<TableName>,
}

impl BuildState {
    fn apply(self, line: &SourceLine<'_>, policy: UnboundColumnPolicy) -> Result<Self, DslError> {
        tracing::trace!(line = line.number, text = line.text, "processing line");
        match classify(line.text) {
            LineKind::TableDecl { name } => self.enter_table(name, line),
            LineKind::ColumnDecl { column_type, name } => {
                self.add_column(column_type, name, line, policy)
            }
            LineKind::Unrecognized => {
                tracing::trace!(line = line.number, "no declaration found");
                Ok(self)
            }
        }
    }

    fn enter_table(mut self, name: &str, line: &SourceLine<'_>) -> Result<Self, DslError> {
        let table = TableName::new(name).map_err(|source| core_error(source, line))?;
        tracing::debug!(table = %table, line = line.number, "found table");
        self.schema.declare_table(table.clone());
        self.current = Some(table);
        Ok(self)
    }

    fn add_column(
        mut self,
        column_type: &str,
        name: &str,
        line: &SourceLine<'_>,
        policy: UnboundColumnPolicy,
    ) -> Result<Self, DslError> {
        let table = match &self.current {
            Some(current) => self.schema.table_mut(current),
            None => None,
        };
        let Some(table) = table else {
            return match policy {
                UnboundColumnPolicy::Reject => Err(DslError::UnboundColumn {
                    column: name.to_string(),
                    line: line.number,
                    span: line.span.clone(),
                }),
                UnboundColumnPolicy::Skip => {
                    tracing::warn!(
                        column = name,
                        line = line.number,
                        "skipping column declared outside of any table"
                    );
                    Ok(self)
                }
            };
        };

        let column = ColumnName::new(name).map_err(|source| core_error(source, line))?;
        let column_type = ColumnType::new(column_type).map_err(|source| core_error(source, line))?;
        tracing::debug!(
            column = %column,
            column_type = %column_type,
            table = ?self.current.as_ref().map(TableName::as_str),
            "found column"
        );
        table.declare_column(column, column_type);
        Ok(self)
    }
}

fn core_error(source: railtypes_core::SchemaError, line: &SourceLine<'_>) -> DslError {
    DslError::CoreSchemaError {
        source,
        line: line.number,
        span: line.span.clone(),
    }
}
