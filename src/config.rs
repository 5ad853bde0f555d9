//! Configuration System
//!
//! File and environment driven configuration for a DappQL scope: default query
//! parameters, cache engine options, facade behaviour, and logging. Layers are
//! merged by the `config` crate; see [`ConfigLoader`] for the precedence order.

use crate::logging::LoggingConfig;
use crate::params::{CacheOptions, QueryParameters};
use crate::query::AllowanceForwarding;
use crate::types::NetworkId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DappQLConfig {
    /// Scope-wide default query parameters
    #[serde(default)]
    pub query: QueryParameters,

    /// Options forwarded to the cache engine when the scope is mounted
    #[serde(default)]
    pub cache: CacheOptions,

    /// Facade behaviour
    #[serde(default)]
    pub facade: FacadeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacadeConfig {
    /// What the token allowance operation forwards: `context` or `params`
    #[serde(default)]
    pub allowance_forwarding: AllowanceForwarding,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Query: {0}")]
    Query(String),

    #[error("Cache: {0}")]
    Cache(String),

    #[error("Logging: {0}")]
    Logging(String),
}

fn validate_cache(cache: &CacheOptions) -> Result<(), String> {
    if cache.disabled == Some(true) && cache.persist == Some(true) {
        return Err("cannot persist a disabled cache".to_string());
    }
    Ok(())
}

impl DappQLConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.query.network_id == Some(NetworkId(0)) {
            errors.push(ValidationError::Query(
                "network_id 0 is reserved; leave it unset to follow the wallet".to_string(),
            ));
        }
        if let Err(e) = validate_cache(&self.query.cache) {
            errors.push(ValidationError::Query(e));
        }
        if let Err(e) = validate_cache(&self.cache) {
            errors.push(ValidationError::Cache(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
