//! Config loader: assembles sources in precedence order and deserializes the result.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::DappQLConfig;
use crate::error::DappQLError;
use config::File;
use config::FileFormat;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`DappQLConfig`].
///
/// Precedence (lowest to highest):
/// 1. Merge-policy defaults
/// 2. Global file ($XDG_CONFIG_HOME/dappql/config.toml)
/// 3. Workspace files (config/config.toml, then config/{DAPPQL_ENV}.toml)
/// 4. Environment variables (DAPPQL_<SECTION>__<KEY>)
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    pub fn load(workspace_root: &Path) -> Result<DappQLConfig, DappQLError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: DappQLConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace_root = %workspace_root.display(),
            network_id = ?config.query.network_id,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file, on top of the defaults only.
    pub fn load_from_file(path: &Path) -> Result<DappQLConfig, DappQLError> {
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Location of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
