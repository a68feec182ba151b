use std::path::{Path, PathBuf};

use railtypes_dsl::UnboundColumnPolicy;
use serde::{Deserialize, Serialize};

use crate::cli::GenerateArgs;
use crate::error::CliError;

/// CLI configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Settings for interface generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Schema location relative to the base path.
    #[serde(default = "default_schema_file")]
    pub schema_file: PathBuf,
    #[serde(default)]
    pub unbound_columns: UnboundColumns,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            schema_file: default_schema_file(),
            unbound_columns: UnboundColumns::default(),
        }
    }
}

/// Config spelling of [`UnboundColumnPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnboundColumns {
    #[default]
    Error,
    Skip,
}

impl From<UnboundColumns> for UnboundColumnPolicy {
    fn from(value: UnboundColumns) -> Self {
        match value {
            UnboundColumns::Error => UnboundColumnPolicy::Reject,
            UnboundColumns::Skip => UnboundColumnPolicy::Skip,
        }
    }
}

fn default_schema_file() -> PathBuf {
    PathBuf::from("db/schema.rb")
}

/// Generation parameters after merging config + CLI flags.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub policy: UnboundColumnPolicy,
    pub output: Option<PathBuf>,
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `RAILTYPES_CONFIG` env var
/// 3. `./railtypes.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/railtypes/config.toml`
/// 5. `~/.config/railtypes/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var("RAILTYPES_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("railtypes.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("railtypes/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/railtypes/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    tracing::debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Resolve generation parameters from config + CLI arguments.
///
/// CLI flags take precedence over config file values. An absolute schema
/// file path replaces the base path entirely.
pub fn resolve_generate_params(config: &CliConfig, args: &GenerateArgs) -> GenerateParams {
    let schema_file = args
        .schema_file
        .as_deref()
        .unwrap_or(&config.generate.schema_file);

    let policy = if args.skip_unbound {
        UnboundColumnPolicy::Skip
    } else {
        config.generate.unbound_columns.into()
    };

    GenerateParams {
        schema_path: args.base_path.join(schema_file),
        policy,
        output: args.output.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args(base: &str, schema_file: Option<&str>, skip_unbound: bool) -> GenerateArgs {
        GenerateArgs {
            base_path: PathBuf::from(base),
            schema_file: schema_file.map(PathBuf::from),
            output: None,
            skip_unbound,
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = CliConfig::default();
        assert_eq!(config.generate.schema_file, PathBuf::from("db/schema.rb"));
        assert_eq!(config.generate.unbound_columns, UnboundColumns::Error);
    }

    #[test]
    fn parse_empty_toml() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.generate.schema_file, PathBuf::from("db/schema.rb"));
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[generate]
schema_file = "db/primary_schema.rb"
unbound_columns = "skip"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.generate.schema_file,
            PathBuf::from("db/primary_schema.rb")
        );
        assert_eq!(config.generate.unbound_columns, UnboundColumns::Skip);
    }

    #[test]
    fn parse_rejects_unknown_policy() {
        let toml_str = r#"
[generate]
unbound_columns = "ignore"
"#;
        assert!(toml::from_str::<CliConfig>(toml_str).is_err());
    }

    #[test]
    fn resolve_uses_config_defaults() {
        let params = resolve_generate_params(&CliConfig::default(), &make_args("app", None, false));
        assert_eq!(params.schema_path, PathBuf::from("app/db/schema.rb"));
        assert_eq!(params.policy, UnboundColumnPolicy::Reject);
        assert!(params.output.is_none());
    }

    #[test]
    fn resolve_cli_overrides_config() {
        let mut config = CliConfig::default();
        config.generate.schema_file = PathBuf::from("db/other.rb");
        let params = resolve_generate_params(&config, &make_args("app", Some("schema.rb"), true));
        assert_eq!(params.schema_path, PathBuf::from("app/schema.rb"));
        assert_eq!(params.policy, UnboundColumnPolicy::Skip);
    }

    #[test]
    fn resolve_policy_from_config() {
        let mut config = CliConfig::default();
        config.generate.unbound_columns = UnboundColumns::Skip;
        let params = resolve_generate_params(&config, &make_args("app", None, false));
        assert_eq!(params.policy, UnboundColumnPolicy::Skip);
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("railtypes.toml");
        std::fs::write(&path, "[generate]\nunbound_columns = \"skip\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.generate.unbound_columns, UnboundColumns::Skip);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("railtypes.toml");
        std::fs::write(&path, "[generate\n").unwrap();
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }

    #[test]
    fn load_config_from_explicit_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/railtypes.toml")));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
