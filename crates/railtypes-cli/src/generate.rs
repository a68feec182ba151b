use railtypes_core::types::TableName;
use railtypes_dsl::SchemaBuilder;

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::config::{load_config, resolve_generate_params};
use crate::error::CliError;
use crate::output::{Generated, OutputContext};

/// Read `<base>/db/schema.rb`, build the schema, and write the interfaces.
///
/// Nothing is written unless the whole schema builds.
pub async fn run(
    args: GenerateArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let params = resolve_generate_params(&config, &args);

    tracing::info!(path = %params.schema_path.display(), "reading schema");
    let source_text = tokio::fs::read_to_string(&params.schema_path)
        .await
        .map_err(|e| CliError::Io {
            path: params.schema_path.clone(),
            source: e,
        })?;

    let schema = match SchemaBuilder::with_policy(params.policy).build_source(&source_text) {
        Ok(schema) => schema,
        Err(error) => {
            return Err(CliError::Parse {
                error,
                source_text,
                file: params.schema_path,
            });
        }
    };

    let tables: Vec<&str> = schema.table_names().map(TableName::as_str).collect();
    tracing::info!(?tables, "loaded schema");

    let generated = Generated {
        schema_path: &params.schema_path,
        schema: &schema,
        interfaces: railtypes_dsl::emit(&schema),
    };
    output.deliver(&generated, params.output.as_deref()).await
}
