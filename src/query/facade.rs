//! `DappQL`: the entry point application code issues read queries through.
//!
//! The facade owns a cache engine, an ambient network source, and optionally a
//! [`QueryScope`]. Every query is resolved afresh against the scope defaults and
//! the current ambient network, then forwarded to the engine in one call.

use super::operations::{
    AllowanceForwarding, BatchCalls, EtherBalance, ReadQuery, SingleCall, TokenAllowance,
    TokenBalance, TokenMetadata,
};
use crate::config::DappQLConfig;
use crate::engine::{CacheEngine, CallDescriptor, CallOutput, MaybeCall, QueryState, TokenInfo};
use crate::network::NetworkSource;
use crate::params::QueryParameters;
use crate::resolve::{resolve, DappQLContext, ResolvedConfiguration};
use crate::scope::QueryScope;
use crate::types::QueryAddress;
use std::sync::Arc;
use tracing::{debug, info};

pub struct DappQL<E, N> {
    scope: Option<Arc<QueryScope>>,
    engine: E,
    network: N,
    allowance_forwarding: AllowanceForwarding,
}

impl<E: CacheEngine, N: NetworkSource> DappQL<E, N> {
    /// Mount `scope` over `engine`. The engine receives the scope's cache options
    /// unchanged before any query runs.
    pub fn mount(scope: impl Into<Arc<QueryScope>>, engine: E, network: N) -> Self {
        let scope = scope.into();
        engine.mount(scope.cache_options());
        info!(
            network_id = ?scope.defaults().network_id,
            cache_options = ?scope.cache_options(),
            "Query scope mounted"
        );
        Self {
            scope: Some(scope),
            engine,
            network,
            allowance_forwarding: AllowanceForwarding::default(),
        }
    }

    /// Facade without a scope; defaults resolve as empty parameters.
    pub fn unscoped(engine: E, network: N) -> Self {
        Self {
            scope: None,
            engine,
            network,
            allowance_forwarding: AllowanceForwarding::default(),
        }
    }

    /// Mount a scope built from a loaded config and apply its facade settings.
    pub fn from_config(config: &DappQLConfig, engine: E, network: N) -> Self {
        Self::mount(QueryScope::from_config(config), engine, network)
            .with_allowance_forwarding(config.facade.allowance_forwarding)
    }

    pub fn with_allowance_forwarding(mut self, forwarding: AllowanceForwarding) -> Self {
        self.allowance_forwarding = forwarding;
        self
    }

    pub fn scope(&self) -> Option<&QueryScope> {
        self.scope.as_deref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    pub fn allowance_forwarding(&self) -> AllowanceForwarding {
        self.allowance_forwarding
    }

    /// Resolve `overrides` against this facade's scope and the ambient network.
    pub fn resolve(&self, overrides: &QueryParameters) -> ResolvedConfiguration {
        resolve(
            QueryScope::lookup(self.scope()),
            overrides,
            self.network.active_network(),
        )
    }

    /// Resolved parameters in their wrapper form.
    pub fn context(&self, overrides: &QueryParameters) -> DappQLContext {
        self.resolve(overrides).into_context()
    }

    /// Resolve configuration and delegate `query` to the engine.
    pub fn read<Q: ReadQuery>(&self, query: &Q, overrides: &QueryParameters) -> Q::Output {
        let resolved = self.resolve(overrides);
        debug!(
            kind = %Q::KIND,
            network_id = ?resolved.network_id(),
            network_origin = %resolved.network_origin(),
            "Delegating read query"
        );
        let context = resolved.into_context();
        query.dispatch(&self.engine, &context, self.allowance_forwarding)
    }

    pub fn call(
        &self,
        call: Option<&CallDescriptor>,
        overrides: &QueryParameters,
    ) -> QueryState<CallOutput> {
        self.read(&SingleCall(call), overrides)
    }

    pub fn calls(
        &self,
        calls: &[MaybeCall],
        overrides: &QueryParameters,
    ) -> Vec<QueryState<CallOutput>> {
        self.read(&BatchCalls(calls), overrides)
    }

    pub fn ether_balance(
        &self,
        address: QueryAddress,
        overrides: &QueryParameters,
    ) -> QueryState<u128> {
        self.read(&EtherBalance(address), overrides)
    }

    pub fn token(&self, token: QueryAddress, overrides: &QueryParameters) -> QueryState<TokenInfo> {
        self.read(&TokenMetadata(token), overrides)
    }

    pub fn token_allowance(
        &self,
        token: QueryAddress,
        owner: QueryAddress,
        spender: QueryAddress,
        overrides: &QueryParameters,
    ) -> QueryState<u128> {
        self.read(
            &TokenAllowance {
                token,
                owner,
                spender,
            },
            overrides,
        )
    }

    pub fn token_balance(
        &self,
        token: QueryAddress,
        holder: QueryAddress,
        overrides: &QueryParameters,
    ) -> QueryState<u128> {
        self.read(&TokenBalance { token, holder }, overrides)
    }

    /// Reverse name lookup, passed straight to the engine with no resolution.
    pub fn lookup_address(&self, address: QueryAddress) -> QueryState<String> {
        self.engine.lookup_address(address)
    }
}

impl<E, N> std::fmt::Debug for DappQL<E, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DappQL")
            .field("scope", &self.scope)
            .field("allowance_forwarding", &self.allowance_forwarding)
            .finish_non_exhaustive()
    }
}
