use std::path::PathBuf;

use railtypes_dsl::DslError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error (unreadable schema, failed write)
/// - 2: invalid arguments / configuration
/// - 3: parse error (column outside of any table)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned while generating interfaces.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Schema build errors from railtypes-dsl.
    #[error("failed to parse {file}: {error}")]
    Parse {
        #[source]
        error: DslError,
        source_text: String,
        file: PathBuf,
    },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Config { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { error, file, .. } => serde_json::json!({
                "error": "parse_error",
                "file": file.display().to_string(),
                "line": error.line(),
                "message": error.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            Self::Other(message) => serde_json::json!({
                "error": "error",
                "message": message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railtypes_dsl::Span;

    fn unbound_column() -> CliError {
        CliError::Parse {
            error: DslError::UnboundColumn {
                column: "title".into(),
                line: 4,
                span: Span::new(30, 46),
            },
            source_text: String::new(),
            file: PathBuf::from("db/schema.rb"),
        }
    }

    #[test]
    fn parse_error_exit_code() {
        assert_eq!(unbound_column().exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::Config {
            message: "bad config".into(),
        };
        assert_eq!(err.exit_code(), ExitCode::InvalidArguments);
    }

    #[test]
    fn io_error_exit_code() {
        let err = CliError::Io {
            path: PathBuf::from("app/db/schema.rb"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn display_parse_error() {
        let msg = unbound_column().to_string();
        assert!(msg.contains("db/schema.rb"));
        assert!(msg.contains("'title'"));
    }

    #[test]
    fn to_json_parse_error() {
        let json = unbound_column().to_json();
        assert_eq!(json["error"], "parse_error");
        assert_eq!(json["file"], "db/schema.rb");
        assert_eq!(json["line"], 4);
    }

    #[test]
    fn to_json_io_error() {
        let err = CliError::Io {
            path: PathBuf::from("/tmp/file"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "io_error");
        assert_eq!(json["path"], "/tmp/file");
    }

    #[test]
    fn to_json_config_error() {
        let err = CliError::Config {
            message: "bad value".into(),
        };
        assert_eq!(err.to_json()["error"], "config_error");
    }

    #[test]
    fn to_json_other_error() {
        let err = CliError::Other("unexpected".into());
        let json = err.to_json();
        assert_eq!(json["error"], "error");
        assert!(json["message"].as_str().unwrap().contains("unexpected"));
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::GeneralError as i32, 1);
        assert_eq!(ExitCode::InvalidArguments as i32, 2);
        assert_eq!(ExitCode::ParseError as i32, 3);
    }
}
