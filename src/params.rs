//! Query parameters and cache hints.
//!
//! Every field is optional; `None` means "not specified at this layer" and lets a
//! lower-precedence layer supply the value. Overlaying never mutates either side.

use crate::error::DappQLError;
use crate::types::NetworkId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often the engine should refetch a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RefreshRepr", into = "RefreshRepr")]
pub enum RefreshPolicy {
    /// Refetch on every new block.
    EveryBlock,
    /// Fetch once and keep the value.
    Never,
    /// Refetch every `n` blocks (`n >= 1`).
    Blocks(u32),
}

/// Wire form: `"everyBlock"`, `"never"`, or a block count.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RefreshRepr {
    Blocks(u32),
    Keyword(String),
}

impl TryFrom<RefreshRepr> for RefreshPolicy {
    type Error = DappQLError;

    fn try_from(repr: RefreshRepr) -> Result<Self, Self::Error> {
        match repr {
            RefreshRepr::Blocks(n) => RefreshPolicy::from_blocks(n),
            RefreshRepr::Keyword(word) => word.parse(),
        }
    }
}

impl From<RefreshPolicy> for RefreshRepr {
    fn from(policy: RefreshPolicy) -> Self {
        match policy {
            RefreshPolicy::EveryBlock => RefreshRepr::Keyword("everyBlock".to_string()),
            RefreshPolicy::Never => RefreshRepr::Keyword("never".to_string()),
            RefreshPolicy::Blocks(n) => RefreshRepr::Blocks(n),
        }
    }
}

impl RefreshPolicy {
    fn from_blocks(n: u32) -> Result<Self, DappQLError> {
        if n == 0 {
            return Err(DappQLError::InvalidRefresh(
                "block interval must be at least 1".to_string(),
            ));
        }
        Ok(RefreshPolicy::Blocks(n))
    }
}

impl FromStr for RefreshPolicy {
    type Err = DappQLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "everyBlock" | "every-block" | "every_block" => Ok(RefreshPolicy::EveryBlock),
            "never" => Ok(RefreshPolicy::Never),
            other => other
                .parse::<u32>()
                .map_err(|_| DappQLError::InvalidRefresh(format!("'{}'", s)))
                .and_then(RefreshPolicy::from_blocks),
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::EveryBlock => write!(f, "everyBlock"),
            RefreshPolicy::Never => write!(f, "never"),
            RefreshPolicy::Blocks(n) => write!(f, "{}", n),
        }
    }
}

/// Hints for the cache engine. Carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Age in milliseconds after which a cached response is stale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_ms: Option<u64>,

    /// Keep cached responses across sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist: Option<bool>,

    /// Bypass the cache for matching queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl CacheOptions {
    pub const EMPTY: CacheOptions = CacheOptions {
        max_age_ms: None,
        persist: None,
        disabled: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Field-wise overlay: fields set in `overrides` win.
    pub fn overlay(&self, overrides: &CacheOptions) -> CacheOptions {
        CacheOptions {
            max_age_ms: overrides.max_age_ms.or(self.max_age_ms),
            persist: overrides.persist.or(self.persist),
            disabled: overrides.disabled.or(self.disabled),
        }
    }
}

/// Parameters attached to a read query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Network the query targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<NetworkId>,

    /// The call target never changes state; results may be kept indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<RefreshPolicy>,

    #[serde(default, skip_serializing_if = "CacheOptions::is_empty")]
    pub cache: CacheOptions,
}

impl QueryParameters {
    pub const EMPTY: QueryParameters = QueryParameters {
        network_id: None,
        is_static: None,
        refresh: None,
        cache: CacheOptions::EMPTY,
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn with_network(mut self, network_id: NetworkId) -> Self {
        self.network_id = Some(network_id);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = Some(is_static);
        self
    }

    pub fn with_refresh(mut self, refresh: RefreshPolicy) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn with_cache(mut self, cache: CacheOptions) -> Self {
        self.cache = cache;
        self
    }

    /// Shallow overlay of every field, `network_id` included. Fields set in
    /// `overrides` win; nothing else is interpreted.
    pub fn overlay(&self, overrides: &QueryParameters) -> QueryParameters {
        QueryParameters {
            network_id: overrides.network_id.or(self.network_id),
            is_static: overrides.is_static.or(self.is_static),
            refresh: overrides.refresh.or(self.refresh),
            cache: self.cache.overlay(&overrides.cache),
        }
    }
}
