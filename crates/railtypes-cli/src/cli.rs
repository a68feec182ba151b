use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser};

/// Generate TypeScript interfaces from a Rails db/schema.rb.
///
/// Every `create_table` block becomes one `interface I<TableName>` with an
/// `id: integer` attribute followed by the declared columns. Column types are
/// copied verbatim from the schema.
#[derive(Parser)]
#[command(
    name = "railtypes",
    version,
    about = "Generate TypeScript interfaces from a Rails db/schema.rb",
    after_help = "Example: railtypes ~/code/my-rails-app > src/types/db.ts"
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options that control configuration and output, not generation.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: RAILTYPES_CONFIG]
    #[arg(short = 'c', long = "config", env = "RAILTYPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,
}

/// Arguments for interface generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Root directory of the Rails application
    #[arg(value_name = "BASE_PATH")]
    pub base_path: PathBuf,

    /// Schema file relative to BASE_PATH (default: db/schema.rb)
    #[arg(short = 's', long = "schema-file")]
    pub schema_file: Option<PathBuf>,

    /// Write interfaces to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Drop columns declared outside of any create_table block instead of failing
    #[arg(long = "skip-unbound")]
    pub skip_unbound: bool,
}
