//! Query scope: the defaults shared by every query issued through one facade.

use crate::config::DappQLConfig;
use crate::params::{CacheOptions, QueryParameters};

static EMPTY_DEFAULTS: QueryParameters = QueryParameters::EMPTY;

/// Scope-wide query defaults plus the options handed to the cache engine when the
/// scope is mounted. Immutable once built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryScope {
    defaults: QueryParameters,
    cache_options: CacheOptions,
}

impl QueryScope {
    pub fn new(query_params: Option<QueryParameters>, cache_options: Option<CacheOptions>) -> Self {
        Self {
            defaults: query_params.unwrap_or_default(),
            cache_options: cache_options.unwrap_or_default(),
        }
    }

    /// Scope built from the `[query]` and `[cache]` sections of a loaded config.
    pub fn from_config(config: &DappQLConfig) -> Self {
        Self::new(Some(config.query), Some(config.cache))
    }

    pub fn defaults(&self) -> &QueryParameters {
        &self.defaults
    }

    /// Options for the engine's own scope. Never read by this crate.
    pub fn cache_options(&self) -> &CacheOptions {
        &self.cache_options
    }

    /// Defaults of the enclosing scope, or empty parameters when there is none.
    pub fn lookup(scope: Option<&QueryScope>) -> &QueryParameters {
        scope.map(QueryScope::defaults).unwrap_or(&EMPTY_DEFAULTS)
    }
}
