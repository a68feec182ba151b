use miette::{Diagnostic, NamedSource, SourceSpan};
use railtypes_dsl::DslError;

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `SchemaDiagnostic` pointing at the
/// offending schema line.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());
    let span = error.span();
    let span: SourceSpan = (span.start, span.len()).into();

    match error {
        DslError::UnboundColumn { column, .. } => SchemaDiagnostic {
            src: named_src,
            span,
            message: format!("column '{column}' is declared before any table"),
            label: "no create_table above this line".to_string(),
            suggestion: Some(
                "Move the column into a create_table block, or pass --skip-unbound to drop it."
                    .to_string(),
            ),
        },
        DslError::CoreSchemaError { source, .. } => SchemaDiagnostic {
            src: named_src,
            span,
            message: format!("schema validation error: {source}"),
            label: "validation failed".to_string(),
            suggestion: None,
        },
        // Catch future non_exhaustive variants
        _ => SchemaDiagnostic {
            src: named_src,
            span,
            message: error.to_string(),
            label: "error".to_string(),
            suggestion: None,
        },
    }
}

/// Render a build error for a schema file using miette.
pub fn render_diagnostic(error: &DslError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(dsl_error_to_diagnostic(error, source, filename))
}
