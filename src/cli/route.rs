//! CLI route: run context and the single command dispatch table.

use crate::cli::parse::{Commands, ConfigCommands, ResolveArgs};
use crate::cli::presentation::{
    build_resolution_report, format_config_validation_text, format_resolution_text,
};
use crate::config::{ConfigLoader, DappQLConfig};
use crate::error::DappQLError;
use crate::params::{CacheOptions, QueryParameters};
use crate::resolve::resolve;
use crate::scope::QueryScope;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: the effective configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    config: DappQLConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, DappQLError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self { config })
    }

    pub fn from_config(config: DappQLConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DappQLConfig {
        &self.config
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, DappQLError> {
        match command {
            Commands::Resolve(args) => self.handle_resolve(args),
            Commands::Config { command } => match command {
                ConfigCommands::Show { format } => self.handle_config_show(format),
                ConfigCommands::Validate => self.handle_config_validate(),
            },
        }
    }

    fn handle_resolve(&self, args: &ResolveArgs) -> Result<String, DappQLError> {
        let scope = QueryScope::from_config(&self.config);
        let overrides = overrides_from_args(args);
        let resolved = resolve(scope.defaults(), &overrides, args.ambient);
        debug!(
            network_id = ?resolved.network_id(),
            origin = %resolved.network_origin(),
            "Resolved CLI overrides"
        );

        let report = build_resolution_report(scope.defaults(), &overrides, &resolved);
        match args.format.as_str() {
            "json" => Ok(serde_json::to_string_pretty(&report)?),
            "text" => Ok(format_resolution_text(&report)),
            other => Err(DappQLError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_config_show(&self, format: &str) -> Result<String, DappQLError> {
        match format {
            "toml" => Ok(toml::to_string_pretty(&self.config)?),
            "json" => Ok(serde_json::to_string_pretty(&self.config)?),
            other => Err(DappQLError::ConfigError(format!(
                "Invalid output format: {} (must be 'toml' or 'json')",
                other
            ))),
        }
    }

    fn handle_config_validate(&self) -> Result<String, DappQLError> {
        let result = self.config.validate();
        let text = format_config_validation_text(&result);
        match result {
            Ok(()) => Ok(text),
            Err(_) => Err(DappQLError::ConfigError(text)),
        }
    }
}

fn overrides_from_args(args: &ResolveArgs) -> QueryParameters {
    QueryParameters {
        network_id: args.network,
        is_static: args.is_static,
        refresh: args.refresh,
        cache: CacheOptions {
            max_age_ms: args.max_age_ms,
            persist: args.persist,
            disabled: args.no_cache.then_some(true),
        },
    }
}
