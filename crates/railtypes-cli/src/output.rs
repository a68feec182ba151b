use std::path::Path;

use console::{Style, Term};
use railtypes_core::types::Schema;

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// The result of one run: the parsed schema and its interfaces.
pub struct Generated<'a> {
    pub schema_path: &'a Path,
    pub schema: &'a Schema,
    pub interfaces: String,
}

impl Generated<'_> {
    /// Text written to stdout or the output file, without the final newline.
    pub fn render(&self, mode: OutputMode) -> Result<String, CliError> {
        match mode {
            OutputMode::Json => {
                let value = serde_json::json!({
                    "file": self.schema_path.display().to_string(),
                    "schema": self.schema,
                    "interfaces": self.interfaces,
                });
                serde_json::to_string_pretty(&value)
                    .map_err(|e| CliError::Other(format!("failed to serialize schema: {e}")))
            }
            OutputMode::Human | OutputMode::Plain => Ok(self.interfaces.clone()),
        }
    }
}

/// Where generated interfaces and messages go.
///
/// Interfaces go to stdout or the `--output` file. Notes and errors go to
/// stderr so redirected stdout stays valid TypeScript.
pub struct OutputContext {
    pub mode: OutputMode,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();
        Self {
            mode,
            quiet: global.quiet,
            use_color,
        }
    }

    /// Writes the rendered output to `target`, or to stdout when `None`.
    pub async fn deliver(
        &self,
        generated: &Generated<'_>,
        target: Option<&Path>,
    ) -> Result<(), CliError> {
        let rendered = generated.render(self.mode)?;
        let count = generated.schema.len();
        match target {
            Some(path) => {
                tokio::fs::write(path, format!("{rendered}\n"))
                    .await
                    .map_err(|e| CliError::Io {
                        path: path.to_path_buf(),
                        source: e,
                    })?;
                let msg = format!("Wrote {count} interfaces to {}", path.display());
                self.note(Some(("ok", Style::new().green().bold())), &msg);
            }
            None => {
                println!("{rendered}");
                let msg = format!(
                    "{count} interfaces generated from {}",
                    generated.schema_path.display()
                );
                self.note(None, &msg);
            }
        }
        Ok(())
    }

    /// Human-mode stderr note with an optional styled label.
    fn note(&self, label: Option<(&str, Style)>, msg: &str) {
        if self.quiet || self.mode != OutputMode::Human {
            return;
        }
        match label {
            Some((label, style)) => eprintln!("{} {msg}", self.paint(label, style)),
            None => eprintln!("{msg}"),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Reports a failed run on stderr.
    ///
    /// In human mode a parse error is drawn against the schema source.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let report = render_diagnostic(error, source_text, &file.display().to_string());
                eprintln!("{report:?}");
            }
            (OutputMode::Human, _) => {
                eprintln!("{} {err}", self.paint("error:", Style::new().red().bold()));
            }
            (OutputMode::Json, _) => eprintln!("{}", err.to_json()),
            (OutputMode::Plain, _) => eprintln!("error\t{err}"),
        }
    }
}
