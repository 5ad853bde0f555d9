//! Configuration resolution.
//!
//! Combines three layers into the parameters handed to the cache engine:
//!
//! 1. scope defaults (lowest),
//! 2. call-site overrides, overlaid field by field,
//! 3. the network id, chosen separately from the first of: call override,
//!    scope default, ambient wallet network. A zero id is skipped.
//!
//! Resolution is a pure function of its inputs. It never fails; when no layer
//! names a network the result simply has none and the engine decides what that
//! means.

use crate::params::QueryParameters;
use crate::types::NetworkId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Which layer supplied the resolved network id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkOrigin {
    CallOverride,
    ScopeDefault,
    Ambient,
    Unresolved,
}

impl fmt::Display for NetworkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetworkOrigin::CallOverride => "call",
            NetworkOrigin::ScopeDefault => "scope",
            NetworkOrigin::Ambient => "ambient",
            NetworkOrigin::Unresolved => "unset",
        };
        f.write_str(label)
    }
}

/// Parameters produced by one resolution. Rebuilt on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    params: QueryParameters,
    network_origin: NetworkOrigin,
}

impl ResolvedConfiguration {
    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn into_params(self) -> QueryParameters {
        self.params
    }

    pub fn network_id(&self) -> Option<NetworkId> {
        self.params.network_id
    }

    pub fn network_origin(&self) -> NetworkOrigin {
        self.network_origin
    }

    /// Wrap the resolved parameters the way call sites receive them.
    pub fn into_context(self) -> DappQLContext {
        DappQLContext {
            query_params: self.params,
        }
    }
}

/// Wrapper object around resolved parameters.
///
/// Token allowance engines may receive this whole wrapper rather than the bare
/// parameters, see [`crate::query::AllowanceForwarding`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DappQLContext {
    pub query_params: QueryParameters,
}

/// Resolve scope defaults, call overrides and the ambient network id.
pub fn resolve(
    scope_defaults: &QueryParameters,
    call_overrides: &QueryParameters,
    ambient_network: Option<NetworkId>,
) -> ResolvedConfiguration {
    let mut params = scope_defaults.overlay(call_overrides);
    let (network_id, network_origin) = select_network(
        call_overrides.network_id,
        scope_defaults.network_id,
        ambient_network,
    );
    params.network_id = network_id;

    trace!(
        network_id = ?network_id,
        origin = %network_origin,
        "Resolved query parameters"
    );

    ResolvedConfiguration {
        params,
        network_origin,
    }
}

/// A zero id counts as unset on every tier.
fn select_network(
    call_override: Option<NetworkId>,
    scope_default: Option<NetworkId>,
    ambient: Option<NetworkId>,
) -> (Option<NetworkId>, NetworkOrigin) {
    if let Some(id) = call_override.filter(|id| id.is_set()) {
        return (Some(id), NetworkOrigin::CallOverride);
    }
    if let Some(id) = scope_default.filter(|id| id.is_set()) {
        return (Some(id), NetworkOrigin::ScopeDefault);
    }
    match ambient.filter(|id| id.is_set()) {
        Some(id) => (Some(id), NetworkOrigin::Ambient),
        None => (None, NetworkOrigin::Unresolved),
    }
}
