//! Cache engine contract.
//!
//! The engine performs the actual RPC calls, caches responses, and tracks
//! subscriptions. This crate only decides which parameters each query carries
//! and forwards them; everything an engine returns is handed back unchanged.

use crate::error::EngineError;
use crate::params::{CacheOptions, QueryParameters};
use crate::resolve::DappQLContext;
use crate::types::{Address, QueryAddress};
use serde::{Deserialize, Serialize};

/// One contract read: target, method name, and ABI-level arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDescriptor {
    pub contract: Address,
    pub method: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

impl CallDescriptor {
    pub fn new(contract: Address, method: impl Into<String>) -> Self {
        Self {
            contract,
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// A call descriptor or the skip sentinel (`None`).
pub type MaybeCall = Option<CallDescriptor>;

/// Decoded return values of one contract call.
pub type CallOutput = Vec<serde_json::Value>;

/// ERC-20 token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u128,
}

/// Live state of one query as reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<EngineError>,
    pub is_loading: bool,
}

impl<T> QueryState<T> {
    /// State of a skipped query: nothing requested, nothing pending.
    pub fn idle() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            is_loading: false,
        }
    }

    pub fn failed(error: EngineError) -> Self {
        Self {
            data: None,
            error: Some(error),
            is_loading: false,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Configuration handed to [`CacheEngine::token_allowance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceParams<'a> {
    /// The whole resolver wrapper (`{ query_params }`).
    Context(&'a DappQLContext),
    /// Only the resolved parameters, like every other operation.
    Params(&'a QueryParameters),
}

impl<'a> AllowanceParams<'a> {
    pub fn query_params(&self) -> &'a QueryParameters {
        match *self {
            AllowanceParams::Context(context) => &context.query_params,
            AllowanceParams::Params(params) => params,
        }
    }
}

/// Cached-query execution engine.
pub trait CacheEngine {
    /// Called once when a scope is mounted over this engine, with the scope's
    /// cache options exactly as configured.
    fn mount(&self, _options: &CacheOptions) {}

    fn call(&self, call: Option<&CallDescriptor>, params: &QueryParameters) -> QueryState<CallOutput>;

    /// Result `i` belongs to `calls[i]`; skipped entries keep their slot.
    fn calls(&self, calls: &[MaybeCall], params: &QueryParameters) -> Vec<QueryState<CallOutput>>;

    fn ether_balance(&self, address: QueryAddress, params: &QueryParameters) -> QueryState<u128>;

    fn token(&self, token: QueryAddress, params: &QueryParameters) -> QueryState<TokenInfo>;

    fn token_allowance(
        &self,
        token: QueryAddress,
        owner: QueryAddress,
        spender: QueryAddress,
        params: AllowanceParams<'_>,
    ) -> QueryState<u128>;

    fn token_balance(
        &self,
        token: QueryAddress,
        holder: QueryAddress,
        params: &QueryParameters,
    ) -> QueryState<u128>;

    /// Reverse name lookup (e.g. ENS) for an address.
    fn lookup_address(&self, address: QueryAddress) -> QueryState<String>;
}

impl<E: CacheEngine + ?Sized> CacheEngine for &E {
    fn mount(&self, options: &CacheOptions) {
        (**self).mount(options)
    }

    fn call(&self, call: Option<&CallDescriptor>, params: &QueryParameters) -> QueryState<CallOutput> {
        (**self).call(call, params)
    }

    fn calls(&self, calls: &[MaybeCall], params: &QueryParameters) -> Vec<QueryState<CallOutput>> {
        (**self).calls(calls, params)
    }

    fn ether_balance(&self, address: QueryAddress, params: &QueryParameters) -> QueryState<u128> {
        (**self).ether_balance(address, params)
    }

    fn token(&self, token: QueryAddress, params: &QueryParameters) -> QueryState<TokenInfo> {
        (**self).token(token, params)
    }

    fn token_allowance(
        &self,
        token: QueryAddress,
        owner: QueryAddress,
        spender: QueryAddress,
        params: AllowanceParams<'_>,
    ) -> QueryState<u128> {
        (**self).token_allowance(token, owner, spender, params)
    }

    fn token_balance(
        &self,
        token: QueryAddress,
        holder: QueryAddress,
        params: &QueryParameters,
    ) -> QueryState<u128> {
        (**self).token_balance(token, holder, params)
    }

    fn lookup_address(&self, address: QueryAddress) -> QueryState<String> {
        (**self).lookup_address(address)
    }
}
