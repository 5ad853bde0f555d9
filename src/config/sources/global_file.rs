//! Global config file source: $XDG_CONFIG_HOME/dappql/config.toml (usually
//! ~/.config/dappql/config.toml).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("dappql").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            builder = builder.add_source(File::from(global_path).format(FileFormat::Toml));
        } else {
            debug!(
                config_path = %global_path.display(),
                "No global configuration file; using built-in defaults"
            );
        }
    }
    Ok(builder)
}
