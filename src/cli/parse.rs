//! CLI parse: clap types for DappQL. No behavior; definitions only.

use crate::params::RefreshPolicy;
use crate::types::NetworkId;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// DappQL CLI - inspect query configuration and resolution
#[derive(Parser)]
#[command(name = "dappql")]
#[command(about = "Inspect DappQL query configuration and parameter resolution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve call overrides against the configured scope and show where each value came from
    Resolve(ResolveArgs),
    /// Configuration commands (show, validate)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Network override for the call (id, 0x-hex id, or name such as "polygon")
    #[arg(long)]
    pub network: Option<NetworkId>,

    /// Network reported by the connected wallet
    #[arg(long)]
    pub ambient: Option<NetworkId>,

    /// Refresh policy override: everyBlock, never, or a block count
    #[arg(long)]
    pub refresh: Option<RefreshPolicy>,

    /// Static call override
    #[arg(long = "static")]
    pub is_static: Option<bool>,

    /// Cache max age override in milliseconds
    #[arg(long)]
    pub max_age_ms: Option<u64>,

    /// Cache persistence override
    #[arg(long)]
    pub persist: Option<bool>,

    /// Disable the cache for this call
    #[arg(long)]
    pub no_cache: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Validate the effective configuration
    Validate,
}
