//! Merge rules: defaults, override order, conflict handling.
//!
//! Sources are added lowest precedence first; later sources replace individual
//! keys of earlier ones. Query parameters are left without defaults so that an
//! unset key stays unset and the resolver can fall through to the next layer.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("facade.allowance_forwarding", "context")?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")
}
